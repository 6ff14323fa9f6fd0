use std::borrow::Cow;

use diesel::prelude::*;
use songbook_api::song;
use time::Date;

pub use crate::schema::songs::{self, *};

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Data<'a> {
    pub group: Cow<'a, str>,
    pub title: Cow<'a, str>,
    pub text: Cow<'a, str>,
    pub release_date: Date,
    pub link: Cow<'a, str>,
}

#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Song<'a> {
    pub id: i64,
    #[diesel(embed)]
    pub data: Data<'a>,
}

impl<'a> From<&'a song::Data> for Data<'a> {
    fn from(value: &'a song::Data) -> Self {
        Self {
            group: value.group.as_str().into(),
            title: value.title.as_str().into(),
            text: value.text.as_str().into(),
            release_date: value.release_date,
            link: value.link.as_str().into(),
        }
    }
}

impl From<Data<'_>> for song::Data {
    fn from(value: Data<'_>) -> Self {
        Self {
            group: value.group.into_owned(),
            title: value.title.into_owned(),
            text: value.text.into_owned(),
            release_date: value.release_date,
            link: value.link.into_owned(),
        }
    }
}

impl From<Song<'_>> for song::Song {
    fn from(value: Song<'_>) -> Self {
        Self { id: value.id, data: value.data.into() }
    }
}
