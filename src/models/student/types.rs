use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_receipt: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

/// New student data for creation.
pub struct NewStudent {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_receipt: NaiveDate,
}

/// Form data from the create/edit student forms. The date arrives as the
/// raw `YYYY-MM-DD` string of the date input and is parsed in the handler.
#[derive(Debug, Deserialize)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_receipt: String,
    pub csrf_token: String,
}
