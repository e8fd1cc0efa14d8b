use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

/// Public GitHub account whose numbers fill the stats section.
pub const DEFAULT_GITHUB_USER: &str = "HIMANSHU-PATEL9691";
/// Shown in place of a counter that could not be loaded.
pub const PLACEHOLDER: &str = "--";

#[cfg(feature = "ssr")]
const API_BASE: &str = "https://api.github.com";
/// GitHub's maximum page size for repository listings.
pub const REPOS_PER_PAGE: u64 = 100;
/// Star totals stop after this many repository pages.
pub const MAX_REPO_PAGES: u64 = 10;
#[cfg(feature = "ssr")]
const CACHE_TTL_SECS: i64 = 60 * 30;

#[cfg(feature = "ssr")]
pub static GLOBAL_PROFILE_CACHE: LazyLock<DashMap<String, (DateTime<Utc>, ProfileStats)>> =
    LazyLock::new(DashMap::new);

#[derive(Error, Debug)]
pub enum ProfileError {
    #[cfg(feature = "ssr")]
    #[error("profile request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("profile API returned {0}")]
    Status(http::StatusCode),
    #[error("couldn't decode profile response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub user: String,
}

impl ProfileConfig {
    /// Reads `GITHUB_USER`, falling back to the site owner's account.
    pub fn from_env() -> Self {
        let user = std::env::var("GITHUB_USER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GITHUB_USER.to_string());
        Self { user }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub public_repos: u64,
    pub followers: u64,
    pub stars: u64,
    pub created_at: DateTime<Utc>,
}

impl ProfileStats {
    pub fn days_active(&self, now: DateTime<Utc>) -> u64 {
        (now - self.created_at).num_days().max(0) as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Repositories,
    Followers,
    Stars,
    DaysActive,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Repositories,
        StatKind::Followers,
        StatKind::Stars,
        StatKind::DaysActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Repositories => "Repositories",
            Self::Followers => "Followers",
            Self::Stars => "Stars Earned",
            Self::DaysActive => "Days on GitHub",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Repositories => "extra-folder-git",
            Self::Followers => "extra-users",
            Self::Stars => "extra-star",
            Self::DaysActive => "extra-activity",
        }
    }

    pub fn value(self, stats: &ProfileStats, now: DateTime<Utc>) -> u64 {
        match self {
            Self::Repositories => stats.public_repos,
            Self::Followers => stats.followers,
            Self::Stars => stats.stars,
            Self::DaysActive => stats.days_active(now),
        }
    }

    /// Display text for this counter, or the placeholder when stats are
    /// unavailable.
    pub fn display(self, stats: Option<&ProfileStats>, now: DateTime<Utc>) -> String {
        stats
            .map(|s| format_count(self.value(s, now)))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Compact counter text: `999`, `1.2k`, `15k`, `2.3M`.
pub fn format_count(n: u64) -> String {
    fn scaled(n: u64, unit: u64, suffix: char) -> String {
        let tenths = n * 10 / unit;
        if tenths >= 100 || tenths % 10 == 0 {
            format!("{}{suffix}", tenths / 10)
        } else {
            format!("{}.{}{suffix}", tenths / 10, tenths % 10)
        }
    }
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => scaled(n, 1_000, 'k'),
        _ => scaled(n, 1_000_000, 'M'),
    }
}

/// `GET /users/{user}` fields the counters need.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub public_repos: u64,
    pub followers: u64,
    pub created_at: DateTime<Utc>,
}

/// One entry of `GET /users/{user}/repos`.
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
}

impl ProfileStats {
    /// Combines the profile with its repositories. Stars on forks belong to
    /// the upstream project and are not counted.
    pub fn from_responses(user: UserResponse, repos: &[RepoResponse]) -> Self {
        Self {
            public_repos: user.public_repos,
            followers: user.followers,
            stars: repos
                .iter()
                .filter(|r| !r.fork)
                .map(|r| r.stargazers_count)
                .sum(),
            created_at: user.created_at,
        }
    }
}

/// Stats to render from a lookup result. A failure is logged and leaves the
/// counters on their placeholders.
pub fn loaded<E: fmt::Display>(result: Result<ProfileStats, E>) -> Option<ProfileStats> {
    result
        .map_err(|e| log::warn!("couldn't load profile stats: {e}"))
        .ok()
}

/// Number of repository pages to request for `public_repos`, at least one
/// and at most [`MAX_REPO_PAGES`].
pub fn repo_pages(public_repos: u64) -> u64 {
    public_repos
        .div_ceil(REPOS_PER_PAGE)
        .clamp(1, MAX_REPO_PAGES)
}

#[cfg(feature = "ssr")]
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, ProfileError> {
    let res = client
        .get(url)
        .header(reqwest::header::USER_AGENT, "portfolio-site")
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(ProfileError::Status(res.status()));
    }
    res.json::<T>()
        .await
        .map_err(|e| ProfileError::Decode(e.to_string()))
}

/// Looks up public counters for `user`, serving recent results from cache.
#[cfg(feature = "ssr")]
pub async fn get_profile_stats(user: &str) -> Result<ProfileStats, ProfileError> {
    let cache = &*GLOBAL_PROFILE_CACHE;
    if let Some(entry) = cache.get(user) {
        let (fetched, stats) = &*entry;
        if (Utc::now() - *fetched).num_seconds() < CACHE_TTL_SECS {
            return Ok(stats.clone());
        }
    }

    let client = reqwest::Client::new();
    let profile: UserResponse = get_json(&client, &format!("{API_BASE}/users/{user}")).await?;
    let mut repos: Vec<RepoResponse> = Vec::new();
    for page in 1..=repo_pages(profile.public_repos) {
        let batch: Vec<RepoResponse> = get_json(
            &client,
            &format!("{API_BASE}/users/{user}/repos?per_page={REPOS_PER_PAGE}&page={page}"),
        )
        .await?;
        let last = (batch.len() as u64) < REPOS_PER_PAGE;
        repos.extend(batch);
        if last {
            break;
        }
    }
    let stats = ProfileStats::from_responses(profile, &repos);
    tracing::debug!(user, repos = repos.len(), "refreshed profile stats");
    cache.insert(user.to_string(), (Utc::now(), stats.clone()));
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stats() -> ProfileStats {
        ProfileStats {
            public_repos: 15,
            followers: 1_234,
            stars: 0,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1k");
        assert_eq!(format_count(1_250), "1.2k");
        assert_eq!(format_count(15_900), "15k");
        assert_eq!(format_count(2_340_000), "2.3M");
    }

    #[test]
    fn test_counter_display() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let s = stats();
        assert_eq!(StatKind::Repositories.display(Some(&s), now), "15");
        assert_eq!(StatKind::Followers.display(Some(&s), now), "1.2k");
        assert_eq!(StatKind::DaysActive.display(Some(&s), now), "365");
        for kind in StatKind::ALL {
            assert_eq!(kind.display(None, now), PLACEHOLDER);
        }
    }

    #[test]
    fn test_days_never_negative() {
        let before = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(stats().days_active(before), 0);
    }

    #[test]
    fn test_stats_round_trip_shape() {
        let json = serde_json::to_value(stats()).unwrap();
        assert_eq!(json["public_repos"], 15);
        assert_eq!(json["created_at"], "2023-01-01T00:00:00Z");
    }

    const USER_JSON: &str = r#"{
        "login": "octo",
        "public_repos": 3,
        "followers": 42,
        "created_at": "2022-06-01T12:00:00Z"
    }"#;

    const REPOS_JSON: &str = r#"[
        { "name": "site", "stargazers_count": 7, "fork": false },
        { "name": "upstream-fork", "stargazers_count": 900, "fork": true },
        { "name": "notes", "stargazers_count": 3 }
    ]"#;

    #[test]
    fn test_from_responses_skips_forks() {
        let user: UserResponse = serde_json::from_str(USER_JSON).unwrap();
        let repos: Vec<RepoResponse> = serde_json::from_str(REPOS_JSON).unwrap();
        assert!(!repos[2].fork);

        let stats = ProfileStats::from_responses(user, &repos);
        assert_eq!(stats.public_repos, 3);
        assert_eq!(stats.followers, 42);
        assert_eq!(stats.stars, 10);
        assert_eq!(
            stats.created_at,
            Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_user_without_counters_is_rejected() {
        assert!(serde_json::from_str::<UserResponse>(r#"{ "login": "octo" }"#).is_err());
    }

    #[test]
    fn test_failed_lookup_shows_placeholders() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let failures = [
            ProfileError::Status(http::StatusCode::FORBIDDEN),
            ProfileError::Decode("missing field `followers`".into()),
        ];
        for err in failures {
            let shown = loaded(Err::<ProfileStats, _>(err));
            assert_eq!(shown, None);
            for kind in StatKind::ALL {
                assert_eq!(kind.display(shown.as_ref(), now), PLACEHOLDER);
            }
        }
        assert_eq!(loaded(Ok::<_, ProfileError>(stats())), Some(stats()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProfileError::Status(http::StatusCode::NOT_FOUND).to_string(),
            "profile API returned 404 Not Found"
        );
        assert_eq!(
            ProfileError::Decode("eof".into()).to_string(),
            "couldn't decode profile response: eof"
        );
    }

    #[test]
    fn test_repo_pages() {
        assert_eq!(repo_pages(0), 1);
        assert_eq!(repo_pages(100), 1);
        assert_eq!(repo_pages(101), 2);
        assert_eq!(repo_pages(250), 3);
        assert_eq!(repo_pages(50_000), MAX_REPO_PAGES);
    }
}
