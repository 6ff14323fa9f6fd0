pub mod create;
pub mod get;
pub mod list;
pub mod update;

use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(PartialEq, Eq, fake::Dummy))]
pub struct Data {
    pub group: String,
    #[serde(alias = "song")]
    pub title: String,
    pub text: String,
    pub release_date: Date,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(PartialEq, Eq, fake::Dummy))]
pub struct Song {
    pub id: i64,
    #[serde(flatten)]
    pub data: Data,
}
