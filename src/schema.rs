table! {
    accounts (account_id) {
        account_id -> Int4,
        account_number -> Varchar,
        account_type -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
    }
}

table! {
    audit_logs (log_id) {
        log_id -> Int4,
        statement_id -> Nullable<Int4>,
        timestamp -> Timestamptz,
        action -> Nullable<Text>,
    }
}

table! {
    clients (client_id) {
        client_id -> Int4,
        name -> Varchar,
    }
}

table! {
    notifications (notification_id) {
        notification_id -> Int4,
        statement_id -> Nullable<Int4>,
        sent_date -> Timestamptz,
        #[sql_name = "type"]
        kind -> Nullable<Varchar>,
    }
}

table! {
    preferences (preference_id) {
        preference_id -> Int4,
        user_id -> Int4,
        delivery_method -> Nullable<Varchar>,
        effective_date -> Nullable<Date>,
    }
}

table! {
    statements (statement_id) {
        statement_id -> Int4,
        account_id -> Nullable<Int4>,
        issue_date -> Nullable<Date>,
        delivery_type -> Nullable<Varchar>,
        file_path -> Nullable<Text>,
    }
}

table! {
    user_accounts (user_id, account_id) {
        user_id -> Int4,
        account_id -> Int4,
    }
}

table! {
    users (user_id) {
        user_id -> Int4,
        client_id -> Nullable<Int4>,
        email -> Varchar,
        phone_number -> Nullable<Varchar>,
        role -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

joinable!(audit_logs -> statements (statement_id));
joinable!(notifications -> statements (statement_id));
joinable!(preferences -> users (user_id));
joinable!(statements -> accounts (account_id));
joinable!(user_accounts -> accounts (account_id));
joinable!(user_accounts -> users (user_id));
joinable!(users -> clients (client_id));

allow_tables_to_appear_in_same_query!(
    accounts,
    audit_logs,
    clients,
    notifications,
    preferences,
    statements,
    user_accounts,
    users,
);
