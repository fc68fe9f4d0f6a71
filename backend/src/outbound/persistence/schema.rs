//! Diesel table definitions for the embedded SQLite schema.
//!
//! Kept in sync with the SQL under `backend/migrations`. Column types follow
//! Diesel's SQLite mapping: `INTEGER` ids, `DOUBLE` money, `DATE` calendar
//! days and `TIMESTAMP` instants stored as ISO-8601 text.

diesel::table! {
    /// Accounts for every role, including denormalised profile fields.
    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        role -> Text,
        phone -> Nullable<Text>,
        avatar -> Nullable<Text>,
        is_verified -> Bool,
        created_at -> Timestamp,
        /// Free-text room label copied on allocation; not a foreign key.
        room_number -> Nullable<Text>,
        fees_paid -> Double,
        gender -> Nullable<Text>,
    }
}

diesel::table! {
    hostels (id) {
        id -> Integer,
        name -> Text,
        hostel_type -> Text,
        total_floors -> Nullable<Integer>,
        description -> Nullable<Text>,
        created_by -> Nullable<Integer>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Physical rooms with capacity bookkeeping.
    rooms (id) {
        id -> Integer,
        room_number -> Text,
        hostel_id -> Nullable<Integer>,
        floor -> Integer,
        room_type -> Text,
        capacity -> Integer,
        current_occupancy -> Integer,
        status -> Text,
    }
}

diesel::table! {
    /// Allocation history written by capacity-enforcing allocations.
    allocations (id) {
        id -> Integer,
        student_id -> Integer,
        room_id -> Integer,
        allocated_by -> Nullable<Integer>,
        allocated_at -> Timestamp,
        is_active -> Bool,
    }
}

diesel::table! {
    complaints (id) {
        id -> Integer,
        student_id -> Integer,
        room_id -> Nullable<Integer>,
        category -> Text,
        description -> Text,
        photo -> Nullable<Text>,
        status -> Text,
        assigned_to -> Nullable<Integer>,
        created_at -> Timestamp,
        room_number -> Nullable<Text>,
    }
}

diesel::table! {
    leaves (id) {
        id -> Integer,
        student_id -> Integer,
        from_date -> Date,
        to_date -> Date,
        reason -> Text,
        status -> Text,
        approved_by -> Nullable<Integer>,
        rejection_reason -> Nullable<Text>,
        applied_at -> Timestamp,
    }
}

diesel::table! {
    room_change_requests (id) {
        id -> Integer,
        student_id -> Integer,
        current_room -> Text,
        requested_room -> Text,
        reason -> Text,
        status -> Text,
        applied_at -> Timestamp,
    }
}

diesel::table! {
    payments (id) {
        id -> Integer,
        student_id -> Integer,
        amount -> Double,
        due_date -> Nullable<Date>,
        paid_date -> Nullable<Timestamp>,
        status -> Text,
        transaction_id -> Nullable<Text>,
        gateway_response -> Nullable<Text>,
    }
}

diesel::table! {
    /// One row per roll call; `records` holds a JSON array of marks.
    attendance (id) {
        id -> Integer,
        date -> Date,
        hostel_id -> Nullable<Integer>,
        marked_by -> Integer,
        records -> Text,
    }
}

diesel::table! {
    notices (id) {
        id -> Integer,
        title -> Text,
        content -> Text,
        notice_type -> Text,
        is_pinned -> Bool,
        posted_by -> Integer,
        /// JSON array of user ids.
        read_by -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    violations (id) {
        id -> Integer,
        student_id -> Integer,
        violation_type -> Text,
        severity -> Text,
        description -> Nullable<Text>,
        issued_by -> Integer,
        issued_at -> Timestamp,
    }
}

diesel::table! {
    activity_log (id) {
        id -> Integer,
        action -> Text,
        performed_by -> Nullable<Integer>,
        target_model -> Text,
        target_id -> Nullable<Integer>,
        details -> Nullable<Text>,
        logged_at -> Timestamp,
    }
}

diesel::joinable!(complaints -> users (student_id));
diesel::joinable!(leaves -> users (student_id));
diesel::joinable!(room_change_requests -> users (student_id));
diesel::joinable!(payments -> users (student_id));
diesel::joinable!(violations -> users (student_id));
diesel::joinable!(allocations -> rooms (room_id));
diesel::joinable!(rooms -> hostels (hostel_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    hostels,
    rooms,
    allocations,
    complaints,
    leaves,
    room_change_requests,
    payments,
    attendance,
    notices,
    violations,
    activity_log,
);
