//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{board, calendar, equipment, health, requests, teams, technicians};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "0.1.0",
        description = "Equipment maintenance tracker REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Teams & technicians
        teams::list_teams,
        teams::create_team,
        technicians::list_technicians,
        technicians::technicians_by_team,
        technicians::create_technician,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::get_maintenance,
        equipment::create_equipment,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::advance_request,
        // Views
        board::dashboard,
        board::kanban,
        calendar::preventive_calendar,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::EquipmentCategory,
            crate::models::enums::RequestType,
            crate::models::enums::RequestStatus,
            // Teams
            crate::models::team::Team,
            crate::models::team::CreateTeam,
            crate::models::team::Technician,
            crate::models::team::CreateTechnician,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::EquipmentMaintenance,
            crate::models::equipment::EquipmentRequestEntry,
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::AdvanceRequest,
            crate::models::request::RequestFeedEntry,
            crate::models::request::ScheduleEntry,
            // Board
            crate::models::board::DashboardFilter,
            crate::models::board::DashboardResponse,
            crate::models::board::FilterOptions,
            crate::models::board::EmptyState,
            crate::models::board::EmptyStateKind,
            crate::models::board::Tone,
            crate::models::board::KanbanBoard,
            crate::models::board::KanbanColumn,
            crate::models::board::KanbanCard,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "teams", description = "Maintenance teams"),
        (name = "technicians", description = "Technicians"),
        (name = "equipment", description = "Equipment management"),
        (name = "requests", description = "Maintenance requests and workflow"),
        (name = "board", description = "Dashboard and kanban board"),
        (name = "calendar", description = "Preventive maintenance calendar")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
