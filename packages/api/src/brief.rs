//! Brief refinement through the Gemini text API.
//!
//! One call, one fixed instruction template: the user's raw project
//! description plus the category label go out, rewritten Arabic copy comes
//! back. No retry and no response validation beyond pulling the text out —
//! an empty reply becomes [`FALLBACK_REPLY`], and every failure is reported
//! to the caller as a single generic message.

use crate::models::ProjectType;

/// Returned verbatim when the model answers without any text.
pub const FALLBACK_REPLY: &str = "عذراً، لم أتمكن من تحسين الوصف في الوقت الحالي.";

/// Build the refinement instruction around the user's text.
pub fn build_prompt(raw_description: &str, project_type: ProjectType) -> String {
    format!(
        "أنت مساعد تصميم ذكي وخبير في إدارة المشاريع الإبداعية.\n\
         المستخدم يريد تقديم طلب تصميم من نوع: \"{}\".\n\
         الوصف الأولي الذي قدمه المستخدم هو: \"{}\".\n\n\
         قم بإعادة صياغة هذا الوصف ليصبح \"ملخص تصميم\" (Design Brief) احترافي ومفصل.\n\
         - حسن اللغة واجعلها أكثر وضوحاً.\n\
         - اقترح تفاصيل مفقودة قد تكون مهمة لهذا النوع من التصميم (مثل الألوان المقترحة، الجمهور المستهدف، الانطباع المطلوب).\n\
         - قم بتنسيق الرد كنقاط أو فقرات قصيرة.\n\
         - يجب أن يكون الرد باللغة العربية بالكامل.\n\
         - لا تضف مقدمات طويلة، ادخل في الموضوع مباشرة.",
        project_type.label_ar(),
        raw_description
    )
}

#[cfg(feature = "server")]
pub use server::{refine, BriefError};

#[cfg(feature = "server")]
mod server {
    use thiserror::Error;

    use super::{build_prompt, FALLBACK_REPLY};
    use crate::models::ProjectType;

    const MODEL: &str = "gemini-2.5-flash";
    const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

    #[derive(Debug, Error)]
    pub enum BriefError {
        #[error("GEMINI_API_KEY is not configured")]
        MissingKey,
        #[error("assistant request failed: {0}")]
        Http(#[from] reqwest::Error),
    }

    /// Extract the concatenated text parts of the first candidate, if any.
    pub(super) fn extract_text(response: &serde_json::Value) -> String {
        response["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// Send the user's description to the model and return the rewritten
    /// brief, or [`FALLBACK_REPLY`] when the reply carries no text.
    pub async fn refine(
        raw_description: &str,
        project_type: ProjectType,
    ) -> Result<String, BriefError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| BriefError::MissingKey)?;
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            MODEL
        );

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_prompt(raw_description, project_type) }]
            }]
        });

        let response: serde_json::Value = reqwest::Client::new()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = extract_text(&response);
        if text.trim().is_empty() {
            Ok(FALLBACK_REPLY.to_string())
        } else {
            Ok(text)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn extracts_and_joins_text_parts() {
            let response = serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "ملخص " }, { "text": "التصميم" }] }
                }]
            });
            assert_eq!(extract_text(&response), "ملخص التصميم");
        }

        #[test]
        fn missing_candidates_yield_empty_text() {
            assert_eq!(extract_text(&serde_json::json!({})), "");
            let no_text = serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "inline_data": {} }] } }]
            });
            assert_eq!(extract_text(&no_text), "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_description_and_category_label() {
        let prompt = build_prompt("شعار لمقهى صغير", ProjectType::Logo);
        assert!(prompt.contains("شعار لمقهى صغير"));
        assert!(prompt.contains(ProjectType::Logo.label_ar()));
    }

    #[test]
    fn fallback_reply_is_nonempty() {
        assert!(!FALLBACK_REPLY.is_empty());
    }
}
