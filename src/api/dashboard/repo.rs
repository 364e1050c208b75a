//! Static in-memory datasets backing the dashboard views. There is no
//! durable storage; every request gets the same fixture data.

use super::dtos::{
    Assignment, AttendanceSummary, PerformancePoint, ScheduleSlot, SchoolClass, Subject, Teacher,
};

pub(crate) fn teachers() -> Vec<Teacher> {
    vec![
        Teacher { id: "T102938", name: "Emma Baker", email: "emma@example.com", subject: "Mathematics", class_name: "5A", phone: "737-234-563", address: "23 Elm St, Springfield", status: "active", join_date: "2022-09-10", experience: "5 years" },
        Teacher { id: "T293547", name: "Olivia Davis", email: "olivia@example.com", subject: "English", class_name: "1B", phone: "644-224-667", address: "456 Oak Ave, Maplewood", status: "active", join_date: "2023-03-15", experience: "3 years" },
        Teacher { id: "T817364", name: "Ethan Evans", email: "ethan@example.com", subject: "History", class_name: "2A", phone: "433-567-333", address: "789 Pine Rd, Lakeside", status: "leave", join_date: "2021-08-05", experience: "7 years" },
        Teacher { id: "T456789", name: "Sophia Foster", email: "sophia@example.com", subject: "Geography", class_name: "3A", phone: "255-745-245", address: "321 Birch Blvd, Riverside", status: "active", join_date: "2022-01-20", experience: "4 years" },
        Teacher { id: "T738291", name: "Mason Green", email: "mason@example.com", subject: "Physics", class_name: "4A", phone: "213-456-775", address: "654 Cedar Ct, Brookhaven", status: "active", join_date: "2020-11-15", experience: "8 years" },
        Teacher { id: "T629184", name: "Ava Johnson", email: "ava@example.com", subject: "Chemistry", class_name: "6B", phone: "765-432-109", address: "987 Maple St, Oakdale", status: "active", join_date: "2023-01-08", experience: "2 years" },
        Teacher { id: "T547382", name: "Noah Williams", email: "noah@example.com", subject: "Biology", class_name: "4B", phone: "321-987-654", address: "456 Pine Ln, Maplewood", status: "inactive", join_date: "2021-04-12", experience: "6 years" },
        Teacher { id: "T918273", name: "Isabella Brown", email: "isabella@example.com", subject: "Art", class_name: "3B", phone: "123-456-789", address: "789 Birch Dr, Lakeside", status: "active", join_date: "2022-07-30", experience: "4 years" },
        Teacher { id: "T283746", name: "Liam Smith", email: "liam@example.com", subject: "Music", class_name: "2B", phone: "987-654-321", address: "123 Elm Ave, Riverdale", status: "active", join_date: "2023-06-15", experience: "3 years" },
        Teacher { id: "T837465", name: "Charlotte Taylor", email: "charlotte@example.com", subject: "Physical Education", class_name: "1A", phone: "456-789-123", address: "321 Oak Rd, Springfield", status: "leave", join_date: "2020-08-22", experience: "9 years" },
    ]
}

pub(crate) fn find_teacher(id: &str) -> Option<Teacher> {
    teachers().into_iter().find(|t| t.id == id)
}

pub(crate) fn classes() -> Vec<SchoolClass> {
    vec![
        SchoolClass { id: "C1001", name: "5A", grade: "5", section: "A", students: 28, class_teacher: "Emma Baker", room: "Room 101", subjects: vec!["Mathematics", "Science", "English", "History", "Geography"] },
        SchoolClass { id: "C1002", name: "1B", grade: "1", section: "B", students: 24, class_teacher: "Olivia Davis", room: "Room 102", subjects: vec!["English", "Mathematics", "Art", "Science"] },
        SchoolClass { id: "C1003", name: "2A", grade: "2", section: "A", students: 26, class_teacher: "Ethan Evans", room: "Room 201", subjects: vec!["History", "Geography", "Mathematics", "English"] },
        SchoolClass { id: "C1004", name: "3A", grade: "3", section: "A", students: 30, class_teacher: "Sophia Foster", room: "Room 202", subjects: vec!["Geography", "Science", "Mathematics", "English", "Music"] },
        SchoolClass { id: "C1005", name: "4A", grade: "4", section: "A", students: 25, class_teacher: "Mason Green", room: "Room 301", subjects: vec!["Physics", "Chemistry", "Mathematics", "English", "Physical Education"] },
        SchoolClass { id: "C1006", name: "6B", grade: "6", section: "B", students: 22, class_teacher: "Noah Johnson", room: "Room 302", subjects: vec!["Chemistry", "Physics", "Biology", "Mathematics", "English", "History"] },
    ]
}

pub(crate) fn subjects() -> Vec<Subject> {
    vec![
        Subject { id: "SUB001", name: "Mathematics", code: "MATH", description: "Number theory, algebra, geometry, and analysis", department: "Science", teacher_count: 6, class_count: 8 },
        Subject { id: "SUB002", name: "English Literature", code: "ENG", description: "Study of literature, language, and composition", department: "Humanities", teacher_count: 4, class_count: 6 },
        Subject { id: "SUB003", name: "Physics", code: "PHY", description: "Study of matter, energy, and the interaction between them", department: "Science", teacher_count: 3, class_count: 5 },
        Subject { id: "SUB004", name: "History", code: "HIST", description: "Study of past events and human affairs", department: "Humanities", teacher_count: 3, class_count: 4 },
        Subject { id: "SUB005", name: "Computer Science", code: "CS", description: "Study of computers and computational systems", department: "Science", teacher_count: 2, class_count: 3 },
        Subject { id: "SUB006", name: "Geography", code: "GEO", description: "Study of places and the relationships between people and their environments", department: "Humanities", teacher_count: 2, class_count: 4 },
        Subject { id: "SUB007", name: "Chemistry", code: "CHEM", description: "Study of the composition, structure, properties, and change of matter", department: "Science", teacher_count: 3, class_count: 4 },
        Subject { id: "SUB008", name: "Art", code: "ART", description: "Expression or application of human creative skill and imagination", department: "Arts", teacher_count: 1, class_count: 2 },
    ]
}

pub(crate) fn assignments() -> Vec<Assignment> {
    vec![
        Assignment { id: "A1023", title: "Mathematics Problem Set - Linear Equations", subject: "Mathematics", class_name: "5A", teacher: "Emma Baker", due_date: "July 15, 2025", assigned_date: "July 08, 2025", status: "pending", submission_count: 18, total_students: 30 },
        Assignment { id: "A1024", title: "Essay - The Industrial Revolution", subject: "History", class_name: "2A", teacher: "Ethan Evans", due_date: "July 18, 2025", assigned_date: "July 10, 2025", status: "submitted", submission_count: 24, total_students: 26 },
        Assignment { id: "A1025", title: "Map Work - Rivers of the World", subject: "Geography", class_name: "3A", teacher: "Sophia Foster", due_date: "July 12, 2025", assigned_date: "July 01, 2025", status: "graded", submission_count: 30, total_students: 30 },
        Assignment { id: "A1026", title: "Lab Report - Simple Pendulum", subject: "Physics", class_name: "4A", teacher: "Mason Green", due_date: "July 05, 2025", assigned_date: "June 28, 2025", status: "overdue", submission_count: 19, total_students: 25 },
        Assignment { id: "A1027", title: "Reading Comprehension - Chapter 4", subject: "English", class_name: "1B", teacher: "Olivia Davis", due_date: "July 20, 2025", assigned_date: "July 13, 2025", status: "pending", submission_count: 6, total_students: 24 },
    ]
}

pub(crate) fn attendance() -> Vec<AttendanceSummary> {
    vec![
        AttendanceSummary { class_id: "C1001", class_name: "5A", date: "2025-07-14", present: 26, absent: 1, late: 1 },
        AttendanceSummary { class_id: "C1002", class_name: "1B", date: "2025-07-14", present: 22, absent: 2, late: 0 },
        AttendanceSummary { class_id: "C1003", class_name: "2A", date: "2025-07-14", present: 24, absent: 1, late: 1 },
        AttendanceSummary { class_id: "C1004", class_name: "3A", date: "2025-07-14", present: 29, absent: 0, late: 1 },
        AttendanceSummary { class_id: "C1005", class_name: "4A", date: "2025-07-14", present: 23, absent: 2, late: 0 },
        AttendanceSummary { class_id: "C1006", class_name: "6B", date: "2025-07-14", present: 21, absent: 1, late: 0 },
    ]
}

pub(crate) fn schedule() -> Vec<ScheduleSlot> {
    vec![
        ScheduleSlot { id: 1, subject: "Mathematics", class_name: "5A", teacher: "Emma Baker", day: "Monday", start_time: "09:00", end_time: "09:45", room: "Room 101" },
        ScheduleSlot { id: 2, subject: "English", class_name: "1B", teacher: "Olivia Davis", day: "Monday", start_time: "10:00", end_time: "10:45", room: "Room 203" },
        ScheduleSlot { id: 3, subject: "History", class_name: "2A", teacher: "Ethan Evans", day: "Monday", start_time: "11:30", end_time: "12:15", room: "Room 105" },
        ScheduleSlot { id: 4, subject: "Geography", class_name: "3A", teacher: "Sophia Foster", day: "Monday", start_time: "13:00", end_time: "13:45", room: "Room 202" },
        ScheduleSlot { id: 5, subject: "Physics", class_name: "4A", teacher: "Mason Green", day: "Tuesday", start_time: "09:00", end_time: "09:45", room: "Room 301" },
        ScheduleSlot { id: 6, subject: "Chemistry", class_name: "6B", teacher: "Ava Johnson", day: "Tuesday", start_time: "10:00", end_time: "10:45", room: "Room 302" },
        ScheduleSlot { id: 7, subject: "Art", class_name: "3B", teacher: "Isabella Brown", day: "Wednesday", start_time: "11:30", end_time: "12:15", room: "Art Studio" },
        ScheduleSlot { id: 8, subject: "Music", class_name: "2B", teacher: "Liam Smith", day: "Thursday", start_time: "14:00", end_time: "14:45", room: "Music Hall" },
    ]
}

pub(crate) fn performance() -> Vec<PerformancePoint> {
    vec![
        PerformancePoint { name: "Jan", evaluation_score: 78, attendance_rate: 95 },
        PerformancePoint { name: "Feb", evaluation_score: 80, attendance_rate: 97 },
        PerformancePoint { name: "Mar", evaluation_score: 85, attendance_rate: 96 },
        PerformancePoint { name: "Apr", evaluation_score: 82, attendance_rate: 98 },
        PerformancePoint { name: "May", evaluation_score: 84, attendance_rate: 97 },
        PerformancePoint { name: "Jun", evaluation_score: 87, attendance_rate: 99 },
    ]
}
