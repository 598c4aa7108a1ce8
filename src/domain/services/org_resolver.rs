use url::Url;

use crate::domain::{Platform, Profile};

const TITLE_SEPARATOR: &str = " - ";

/// Derive the organization a profile belongs to.
///
/// LinkedIn result titles end with the current company (`"Jane Doe - Acme
/// Corp"`), so the trailing segment is used. For other platforms the profile
/// URL's host stands in for the organization.
pub fn derive_org(profile: &Profile) -> String {
    match profile.platform {
        Platform::Linkedin => org_from_title(&profile.title),
        Platform::Twitter | Platform::Instagram => host_from_url(&profile.url),
    }
}

pub fn org_from_title(title: &str) -> String {
    title
        .rsplit(TITLE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Host of `url`, or an empty string when it cannot be parsed.
pub fn host_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(platform: Platform, title: &str, url: &str) -> Profile {
        Profile::new(title, "Jane", "Doe", url, platform, None)
    }

    #[test]
    fn test_linkedin_uses_trailing_title_segment() {
        let p = profile(
            Platform::Linkedin,
            "Jane Doe - Acme Corp",
            "https://linkedin.com/in/jane",
        );
        assert_eq!(derive_org(&p), "Acme Corp");
    }

    #[test]
    fn test_linkedin_with_several_segments() {
        let p = profile(
            Platform::Linkedin,
            "Jane Doe - Staff Engineer - Initech",
            "https://linkedin.com/in/jane",
        );
        assert_eq!(derive_org(&p), "Initech");
    }

    #[test]
    fn test_linkedin_title_without_separator_is_kept_whole() {
        assert_eq!(org_from_title("Jane Doe"), "Jane Doe");
        assert_eq!(org_from_title(""), "");
    }

    #[test]
    fn test_other_platforms_use_url_host() {
        let p = profile(Platform::Twitter, "Jane (@janedoe)", "https://twitter.com/janedoe");
        assert_eq!(derive_org(&p), "twitter.com");

        let p = profile(
            Platform::Instagram,
            "Jane - Acme",
            "https://www.instagram.com/jane/",
        );
        assert_eq!(derive_org(&p), "www.instagram.com");
    }

    #[test]
    fn test_unparseable_url_gives_empty_org() {
        assert_eq!(host_from_url("not a url"), "");
    }
}
