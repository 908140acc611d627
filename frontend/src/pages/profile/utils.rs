use crate::api::User;

pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/150";
pub const LOAD_FAILED: &str = "Failed to load profile data";

pub fn photo_src(user: Option<&User>) -> String {
    user.and_then(|u| u.photo_url.as_deref())
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_PHOTO)
        .to_string()
}
