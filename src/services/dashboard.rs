//! Dashboard filtering and kanban board

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{
        board::{
            DashboardFilter, DashboardResponse, EmptyState, EmptyStateKind, FilterOptions,
            KanbanBoard, KanbanCard, KanbanColumn, Tone,
        },
        enums::RequestStatus,
        request::RequestFeedEntry,
    },
    repository::Repository,
};

const TIP: &str = "Pro tip: Preventive maintenance today avoids breakdowns tomorrow.";

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Filtered view of the open requests as of `today`
    pub async fn dashboard(&self, filter: DashboardFilter, today: NaiveDate) -> AppResult<DashboardResponse> {
        let feed: Vec<RequestFeedEntry> = self
            .repository
            .requests
            .feed()
            .await?
            .into_iter()
            .filter(|r| filter.include_repaired || r.status != RequestStatus::Repaired)
            .collect();

        let options = filter_options(&feed);
        let requests = apply_filters(&feed, &filter, today);
        let empty_state = requests.is_empty().then(|| empty_state(&filter));

        tracing::debug!("Dashboard: {} of {} requests shown", requests.len(), feed.len());

        Ok(DashboardResponse {
            total: requests.len(),
            requests,
            filter,
            options,
            empty_state,
        })
    }

    pub async fn kanban(&self, today: NaiveDate) -> AppResult<KanbanBoard> {
        let feed = self.repository.requests.feed().await?;
        Ok(build_board(&feed, today))
    }
}

fn selected<T: PartialEq>(selection: &[T], value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

/// Whether one request passes every active filter
pub fn matches(entry: &RequestFeedEntry, filter: &DashboardFilter, today: NaiveDate) -> bool {
    selected(&filter.teams, &entry.team)
        && selected(&filter.technicians, &entry.technician)
        && selected(&filter.statuses, &entry.status)
        && selected(&filter.request_types, &entry.request_type)
        && selected(&filter.equipment, &entry.equipment)
        && (!filter.overdue_only || entry.is_past_due(today))
}

pub fn apply_filters(
    feed: &[RequestFeedEntry],
    filter: &DashboardFilter,
    today: NaiveDate,
) -> Vec<RequestFeedEntry> {
    feed.iter()
        .filter(|entry| matches(entry, filter, today))
        .cloned()
        .collect()
}

/// Pick the message for an empty result from the filters that produced it
pub fn empty_state(filter: &DashboardFilter) -> EmptyState {
    let (kind, tone, message) = match filter.statuses.as_slice() {
        [status] => (EmptyStateKind::Status, Tone::Success, status_message(*status)),
        [_, _, ..] => (
            EmptyStateKind::CaughtUp,
            Tone::Success,
            "🎯 You’re all caught up across these stages! Nothing pending here.",
        ),
        [] if filter.overdue_only => (
            EmptyStateKind::NoOverdue,
            Tone::Success,
            "⏰ No overdue tasks — amazing job staying ahead!",
        ),
        [] if !filter.teams.is_empty()
            || !filter.technicians.is_empty()
            || !filter.request_types.is_empty()
            || !filter.equipment.is_empty() =>
        {
            (
                EmptyStateKind::NoMatch,
                Tone::Info,
                "🔍 No requests match these filters. Try adjusting them to explore more.",
            )
        }
        [] => (
            EmptyStateKind::BoardClear,
            Tone::Success,
            "🌈 Your maintenance board is clear! Enjoy the calm while it lasts 😄",
        ),
    };

    EmptyState {
        kind,
        tone,
        message: message.to_string(),
        tip: TIP.to_string(),
    }
}

fn status_message(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::New => "🎉 No new issues right now! Everything is running smoothly.",
        RequestStatus::InProgress => "💪 No ongoing work at the moment. The team is all caught up!",
        RequestStatus::Repaired => "✨ No repaired items here — looks like nothing needed fixing today.",
        RequestStatus::Scrap => "🧹 No scrapped equipment found. That’s a good sign!",
    }
}

/// Distinct sorted values present in the feed, blanks left out
pub fn filter_options(feed: &[RequestFeedEntry]) -> FilterOptions {
    fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
        values
            .filter(|v| !v.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    FilterOptions {
        teams: distinct(feed.iter().map(|r| &r.team)),
        technicians: distinct(feed.iter().map(|r| &r.technician)),
        statuses: RequestStatus::ALL.to_vec(),
        request_types: feed
            .iter()
            .map(|r| r.request_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        equipment: distinct(feed.iter().map(|r| &r.equipment)),
    }
}

/// Group the feed into the four workflow columns, keeping feed order
pub fn build_board(feed: &[RequestFeedEntry], today: NaiveDate) -> KanbanBoard {
    let columns = RequestStatus::ALL
        .into_iter()
        .map(|stage| KanbanColumn {
            stage,
            cards: feed
                .iter()
                .filter(|r| r.status == stage)
                .map(|r| KanbanCard {
                    id: r.id,
                    subject: r.subject.clone(),
                    equipment: r.equipment.clone(),
                    technician: r.technician.clone(),
                    request_type: r.request_type,
                    scheduled_date: r.scheduled_date,
                    duration_hours: r.duration_hours,
                    overdue: stage != RequestStatus::Repaired && r.is_past_due(today),
                    moves: stage.allowed_transitions().to_vec(),
                })
                .collect(),
        })
        .collect();

    KanbanBoard { columns }
}
