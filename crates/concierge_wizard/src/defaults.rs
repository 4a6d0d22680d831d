//! Bundled prompt templates.

use crate::placeholders;
use concierge_core::{FunctionId, PromptTemplate};
use concierge_error::{ConciergeResult, TemplateError, TemplateErrorKind};
use concierge_interface::PromptTemplateStore;
use std::str::FromStr;
use tracing::{info, instrument};

const CHOICE_GENERATOR: &str = r#"あなたはユーザーの「やりたいこと」を一緒に絞り込むアシスタントです。
これまでのユーザーの選択:
{history}

この流れを踏まえて、次に提示する具体的な選択肢を4つ考えてください。
出力は次の形式のJSON配列のみとし、それ以外の説明文は不要です。
[{"text": "選択肢の短い文章", "icon": "絵文字1文字"}]"#;

const GENERATE_HEADLINE: &str = r#"あなたは、優れたサービス基盤のパーソナライズAIです。
ユーザーは「{preference}」という目的でサービスを利用します。
このユーザーにデライトを与える、魅力的なダッシュボードの新しい見出し案を1つ提案してください。
提案は、日本語の短文のみで、それ以外の説明文は不要です。"#;

const EXECUTOR: &str = r#"目標: {goal}
地域コード: {locality}
この目標を地域内で達成するための実行手順を、検索・比較・予約の順に簡潔に説明してください。"#;

/// The templates a fresh installation starts with.
pub fn default_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate::new(
            FunctionId::ChoiceGenerator.as_str(),
            CHOICE_GENERATOR,
            "絞り込みの次の4択を生成する",
        ),
        PromptTemplate::new(
            FunctionId::GenerateHeadline.as_str(),
            GENERATE_HEADLINE,
            "ダッシュボードの見出しをパーソナライズする",
        ),
        PromptTemplate::new(
            FunctionId::Executor.as_str(),
            EXECUTOR,
            "実行ステップ（現在はシミュレーションのみ）",
        ),
    ]
}

/// Placeholders a well-known template must contain to be useful.
pub fn required_placeholders(function_id: &str) -> &'static [&'static str] {
    match FunctionId::from_str(function_id) {
        Ok(FunctionId::ChoiceGenerator) => &["history"],
        Ok(FunctionId::GenerateHeadline) => &["preference"],
        Ok(FunctionId::Executor) | Err(_) => &[],
    }
}

/// Check that `template` contains its required placeholders.
///
/// # Errors
///
/// Returns [`TemplateErrorKind::MissingPlaceholder`] for the first missing
/// one.
pub fn check_placeholders(template: &PromptTemplate) -> Result<(), TemplateError> {
    let present = placeholders(template.template_text());
    for required in required_placeholders(template.function_id()) {
        if !present.iter().any(|p| p == required) {
            return Err(TemplateError::new(TemplateErrorKind::MissingPlaceholder {
                function_id: template.function_id().clone(),
                placeholder: (*required).to_string(),
            }));
        }
    }
    Ok(())
}

/// Insert each default template whose row is absent.
///
/// Existing rows are left alone so operator edits survive. Returns the
/// number of rows written.
///
/// # Errors
///
/// Propagates store failures.
#[instrument(skip(store))]
pub async fn seed_defaults<S>(store: &S) -> ConciergeResult<usize>
where
    S: PromptTemplateStore + ?Sized,
{
    let mut written = 0;
    for template in default_templates() {
        if store.get(template.function_id()).await?.is_none() {
            store.put(&template).await?;
            written += 1;
        }
    }
    info!(written, "Seeded default prompt templates");
    Ok(written)
}
