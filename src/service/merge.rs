use songbook_api::song::{update, Data};

/// Applies `patch` over `data` field by field.
///
/// A string field is replaced only by a non-empty value, the release date only by a present one.
pub fn merge(mut data: Data, patch: update::Request) -> Data {
    let update::Request { group, title, text, release_date, link } = patch;
    overwrite(&mut data.group, group);
    overwrite(&mut data.title, title);
    overwrite(&mut data.text, text);
    overwrite(&mut data.link, link);
    if let Some(release_date) = release_date {
        data.release_date = release_date;
    }
    data
}

fn overwrite(current: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        *current = value;
    }
}
