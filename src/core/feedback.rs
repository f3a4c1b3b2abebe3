//! User Feedback and Analytics
//!
//! In-memory store for user ratings of generated content plus per-content
//! usage counters. Aggregation feeds back into prompt tuning: the learning
//! insights surface the issues users report most and the aspects they rate
//! highest.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-aspect 1-5 scores attached to a rating.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FeedbackAspects {
    pub relevance: f64,
    pub creativity: f64,
    pub usefulness: f64,
    pub accuracy: f64,
}

/// One user rating of a generated piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeedback {
    pub id: String,
    pub content_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Overall star rating, 1-5.
    pub rating: u8,
    pub aspects: FeedbackAspects,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
    pub would_use_again: bool,
    pub timestamp: DateTime<Utc>,
}

/// A feedback submission before the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    pub content_id: String,
    pub user_id: Option<String>,
    pub rating: u8,
    pub aspects: FeedbackAspects,
    pub text_feedback: Option<String>,
    pub improvements: Option<Vec<String>>,
    pub would_use_again: bool,
}

/// Usage counters and rating rollup for one piece of content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalytics {
    pub content_id: String,
    pub views: u64,
    pub copies: u64,
    pub downloads: u64,
    pub ratings: Vec<UserFeedback>,
    pub avg_rating: f64,
    /// Share of ratings at 4 stars or above, as a percentage.
    pub success_rate: f64,
}

/// A countable user action on content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAction {
    View,
    Copy,
    Download,
}

/// Aggregated signals for improving future generations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningInsights {
    pub common_issues: Vec<String>,
    pub top_rated_features: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub user_preferences: IndexMap<String, f64>,
}

/// In-memory feedback and analytics store.
#[derive(Debug, Default)]
pub struct FeedbackBook {
    feedbacks: Vec<UserFeedback>,
    analytics: IndexMap<String, ContentAnalytics>,
}

impl FeedbackBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating, assigning it an id and timestamp, and roll it into
    /// the content's analytics.
    pub fn record_feedback(&mut self, submission: FeedbackSubmission) -> &UserFeedback {
        let suffix = Uuid::new_v4().simple().to_string();
        let feedback = UserFeedback {
            id: format!(
                "feedback_{}_{}",
                Utc::now().timestamp_millis(),
                &suffix[..9]
            ),
            content_id: submission.content_id.clone(),
            user_id: submission.user_id,
            rating: submission.rating,
            aspects: submission.aspects,
            text_feedback: submission.text_feedback,
            improvements: submission.improvements,
            would_use_again: submission.would_use_again,
            timestamp: Utc::now(),
        };

        let entry = self.analytics_entry(&submission.content_id);
        entry.ratings.push(feedback.clone());
        let count = entry.ratings.len() as f64;
        entry.avg_rating =
            entry.ratings.iter().map(|r| r.rating as f64).sum::<f64>() / count;
        entry.success_rate =
            entry.ratings.iter().filter(|r| r.rating >= 4).count() as f64 / count * 100.0;

        self.feedbacks.push(feedback);
        self.feedbacks.last().expect("feedback just pushed")
    }

    /// Count a view, copy, or download.
    pub fn record_action(&mut self, content_id: &str, action: ContentAction) {
        let entry = self.analytics_entry(content_id);
        match action {
            ContentAction::View => entry.views += 1,
            ContentAction::Copy => entry.copies += 1,
            ContentAction::Download => entry.downloads += 1,
        }
    }

    fn analytics_entry(&mut self, content_id: &str) -> &mut ContentAnalytics {
        self.analytics
            .entry(content_id.to_string())
            .or_insert_with(|| ContentAnalytics {
                content_id: content_id.to_string(),
                ..Default::default()
            })
    }

    pub fn all_feedbacks(&self) -> &[UserFeedback] {
        &self.feedbacks
    }

    pub fn feedback_for_content(&self, content_id: &str) -> Vec<&UserFeedback> {
        self.feedbacks
            .iter()
            .filter(|f| f.content_id == content_id)
            .collect()
    }

    pub fn analytics(&self, content_id: &str) -> Option<&ContentAnalytics> {
        self.analytics.get(content_id)
    }

    pub fn all_analytics(&self) -> impl Iterator<Item = &ContentAnalytics> {
        self.analytics.values()
    }

    /// Aggregate all feedback into learning signals: issues named in
    /// low-rated feedback (2 stars or less), the two best-scoring aspects
    /// among high ratings (4 stars or more), and the three most-reported
    /// improvement requests.
    pub fn learning_insights(&self) -> LearningInsights {
        if self.feedbacks.is_empty() {
            return LearningInsights::default();
        }

        let mut issue_counts: IndexMap<String, u64> = IndexMap::new();
        for feedback in self.feedbacks.iter().filter(|f| f.rating <= 2) {
            for issue in feedback.improvements.iter().flatten() {
                *issue_counts.entry(issue.clone()).or_insert(0) += 1;
            }
        }

        let high_rated: Vec<&UserFeedback> =
            self.feedbacks.iter().filter(|f| f.rating >= 4).collect();
        let divisor = high_rated.len().max(1) as f64;
        let mut preferences = IndexMap::new();
        preferences.insert(
            "relevance".to_string(),
            high_rated.iter().map(|f| f.aspects.relevance).sum::<f64>() / divisor,
        );
        preferences.insert(
            "creativity".to_string(),
            high_rated.iter().map(|f| f.aspects.creativity).sum::<f64>() / divisor,
        );
        preferences.insert(
            "usefulness".to_string(),
            high_rated.iter().map(|f| f.aspects.usefulness).sum::<f64>() / divisor,
        );
        preferences.insert(
            "accuracy".to_string(),
            high_rated.iter().map(|f| f.aspects.accuracy).sum::<f64>() / divisor,
        );

        let mut ranked_features: Vec<(&String, &f64)> = preferences.iter().collect();
        ranked_features
            .sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        let top_rated_features = ranked_features
            .iter()
            .take(2)
            .map(|(name, _)| (*name).clone())
            .collect();

        let mut ranked_issues: Vec<(&String, &u64)> = issue_counts.iter().collect();
        ranked_issues.sort_by(|a, b| b.1.cmp(a.1));
        let improvement_suggestions = ranked_issues
            .iter()
            .take(3)
            .map(|(issue, _)| (*issue).clone())
            .collect();

        LearningInsights {
            common_issues: issue_counts.keys().cloned().collect(),
            top_rated_features,
            improvement_suggestions,
            user_preferences: preferences,
        }
    }

    pub fn clear(&mut self) {
        self.feedbacks.clear();
        self.analytics.clear();
    }
}
