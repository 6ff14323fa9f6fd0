use serde::{Deserialize, Serialize};
use time::Date;

use super::Song;

/// Partial song. Absent fields and empty strings leave the stored value as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))]
#[serde(default)]
pub struct Request {
    pub group: Option<String>,
    #[serde(alias = "song")]
    pub title: Option<String>,
    pub text: Option<String>,
    pub release_date: Option<Date>,
    pub link: Option<String>,
}

pub type Response = Song;
