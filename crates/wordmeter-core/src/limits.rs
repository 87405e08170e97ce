//! Per-platform character limits.
//!
//! Character usage is measured in Unicode scalar values, the same unit as
//! [`classify::char_count`](crate::classify::char_count).

use std::collections::BTreeMap;
use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify;

/// A platform with a fixed character limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// X (formerly Twitter) post.
    X,
    /// Bluesky post.
    Bluesky,
    /// Threads post.
    Threads,
    /// Mastodon post (default instance limit).
    Mastodon,
    /// Instagram caption.
    InstagramCaption,
    /// TikTok caption.
    TiktokCaption,
    /// LinkedIn post.
    LinkedinPost,
    /// Facebook post.
    FacebookPost,
    /// YouTube video title.
    YoutubeTitle,
    /// YouTube video description.
    YoutubeDescription,
    /// Pinterest pin description.
    PinterestDescription,
    /// Reddit post title.
    RedditTitle,
    /// Single SMS segment.
    Sms,
    /// HTML `<title>` as shown in search results.
    MetaTitle,
    /// HTML meta description as shown in search results.
    MetaDescription,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Self; 15] = [
        Self::X,
        Self::Bluesky,
        Self::Threads,
        Self::Mastodon,
        Self::InstagramCaption,
        Self::TiktokCaption,
        Self::LinkedinPost,
        Self::FacebookPost,
        Self::YoutubeTitle,
        Self::YoutubeDescription,
        Self::PinterestDescription,
        Self::RedditTitle,
        Self::Sms,
        Self::MetaTitle,
        Self::MetaDescription,
    ];

    /// Maximum number of characters.
    pub const fn limit(self) -> usize {
        match self {
            Self::X => 280,
            Self::Bluesky => 300,
            Self::Threads | Self::Mastodon | Self::PinterestDescription => 500,
            Self::InstagramCaption | Self::TiktokCaption => 2200,
            Self::LinkedinPost => 3000,
            Self::FacebookPost => 63_206,
            Self::YoutubeTitle => 100,
            Self::YoutubeDescription => 5000,
            Self::RedditTitle => 300,
            Self::Sms | Self::MetaDescription => 160,
            Self::MetaTitle => 60,
        }
    }

    /// Stable identifier, matching the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Bluesky => "bluesky",
            Self::Threads => "threads",
            Self::Mastodon => "mastodon",
            Self::InstagramCaption => "instagram-caption",
            Self::TiktokCaption => "tiktok-caption",
            Self::LinkedinPost => "linkedin-post",
            Self::FacebookPost => "facebook-post",
            Self::YoutubeTitle => "youtube-title",
            Self::YoutubeDescription => "youtube-description",
            Self::PinterestDescription => "pinterest-description",
            Self::RedditTitle => "reddit-title",
            Self::Sms => "sms",
            Self::MetaTitle => "meta-title",
            Self::MetaDescription => "meta-description",
        }
    }
}

/// How much of one platform's limit a text uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlatformUsage {
    /// Platform key (`x`, `meta-title`, or a configured name).
    pub name: String,
    /// Character limit.
    pub limit: usize,
    /// Characters used.
    pub used: usize,
    /// Characters left; zero when over the limit.
    pub remaining: usize,
    /// Whether the text exceeds the limit.
    pub over: bool,
}

impl PlatformUsage {
    fn new(name: impl Into<String>, limit: usize, used: usize) -> Self {
        Self {
            name: name.into(),
            limit,
            used,
            remaining: limit.saturating_sub(used),
            over: used > limit,
        }
    }
}

/// Check `text` against every built-in platform and any `extra` limits.
///
/// An `extra` entry whose name matches a built-in key overrides that limit;
/// other names are appended in name order.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_limits(text: &str, extra: Option<&HashMap<String, usize>>) -> Vec<PlatformUsage> {
    let used = classify::char_count(text);
    let mut custom: BTreeMap<&str, usize> = extra
        .into_iter()
        .flatten()
        .map(|(name, &limit)| (name.as_str(), limit))
        .collect();

    let mut usage: Vec<PlatformUsage> = Platform::ALL
        .iter()
        .map(|platform| {
            let limit = custom
                .remove(platform.key())
                .unwrap_or_else(|| platform.limit());
            PlatformUsage::new(platform.key(), limit, used)
        })
        .collect();

    usage.extend(
        custom
            .into_iter()
            .map(|(name, limit)| PlatformUsage::new(name, limit, used)),
    );
    usage
}

/// Usage of a single built-in platform.
pub fn check_platform(text: &str, platform: Platform) -> PlatformUsage {
    PlatformUsage::new(platform.key(), platform.limit(), classify::char_count(text))
}
