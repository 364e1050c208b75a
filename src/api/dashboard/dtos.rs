use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Teacher {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub subject: &'static str,
    #[serde(rename = "class")]
    pub class_name: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub status: &'static str,
    pub join_date: &'static str,
    pub experience: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchoolClass {
    pub id: &'static str,
    pub name: &'static str,
    pub grade: &'static str,
    pub section: &'static str,
    pub students: u32,
    pub class_teacher: &'static str,
    pub room: &'static str,
    pub subjects: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    pub department: &'static str,
    pub teacher_count: u32,
    pub class_count: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Assignment {
    pub id: &'static str,
    pub title: &'static str,
    pub subject: &'static str,
    #[serde(rename = "class")]
    pub class_name: &'static str,
    pub teacher: &'static str,
    pub due_date: &'static str,
    pub assigned_date: &'static str,
    pub status: &'static str,
    pub submission_count: u32,
    pub total_students: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttendanceSummary {
    pub class_id: &'static str,
    #[serde(rename = "class")]
    pub class_name: &'static str,
    pub date: &'static str,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduleSlot {
    pub id: u32,
    pub subject: &'static str,
    #[serde(rename = "class")]
    pub class_name: &'static str,
    pub teacher: &'static str,
    pub day: &'static str,
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub room: &'static str,
}

/// One month of aggregated teacher evaluation and attendance figures.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PerformancePoint {
    pub name: &'static str,
    pub evaluation_score: u32,
    pub attendance_rate: u32,
}
