//! Request bodies and query parameters sent to the API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::summary::SummaryPeriod;
use super::task::{TaskPriority, TaskStatus};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /tasks`
///
/// An unset due date is sent as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Body of `PUT /tasks/{id}`; absent fields are left untouched by the server.
///
/// `due_date` is tri-state: `None` omits the field, `Some(None)` clears it,
/// `Some(Some(date))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub due_date: Option<Option<NaiveDate>>,
}

/// Query string of `GET /tasks`; unset filters are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

/// Query string of `GET /time-summary`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryQuery {
    pub period: SummaryPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl SummaryQuery {
    pub fn preset(period: SummaryPeriod) -> Self {
        Self { period, start_date: None, end_date: None }
    }

    pub fn custom(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            period: SummaryPeriod::Custom,
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_task_sends_null_due_date_and_omits_blank_fields() {
        let body = NewTask {
            title: "Plan sprint".into(),
            description: None,
            priority: Some(TaskPriority::Low),
            status: None,
            due_date: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "Plan sprint", "priority": "low", "due_date": null})
        );
    }

    #[test]
    fn task_update_distinguishes_clear_from_absent() {
        let clear = TaskUpdate { due_date: Some(None), ..Default::default() };
        assert_eq!(serde_json::to_value(&clear).unwrap(), json!({"due_date": null}));

        let untouched = TaskUpdate { title: Some("Renamed".into()), ..Default::default() };
        assert_eq!(serde_json::to_value(&untouched).unwrap(), json!({"title": "Renamed"}));

        let set = TaskUpdate {
            due_date: Some(NaiveDate::from_ymd_opt(2024, 6, 30)),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({"due_date": "2024-06-30"}));
    }

    #[test]
    fn summary_query_omits_dates_for_presets() {
        let query = SummaryQuery::preset(SummaryPeriod::ThisWeek);
        assert_eq!(serde_json::to_value(query).unwrap(), json!({"period": "this_week"}));
    }
}
