//! Offline stand-in for the execution step.

use concierge_core::{ExecutionResult, GOAL_PATH_SEPARATOR, GoalDescriptor};
use concierge_error::ConciergeResult;
use concierge_interface::PlanExecutor;
use tracing::{debug, instrument};

const TOKYO: &str = "東京都";
const OSAKA: &str = "大阪府";
const ANY_REGION: &str = "指定エリア";

const MISSING_GOAL: &str = "（目標未設定）";
const MISSING_TARGET: &str = "ご希望のサービス";
const MISSING_CODE: &str = "未入力";

/// Coarse region label from the first character of a locality code.
pub fn region_label(locality_code: &str) -> &'static str {
    match locality_code.chars().next() {
        Some('1') => TOKYO,
        Some('5') => OSAKA,
        _ => ANY_REGION,
    }
}

/// Describe a fictitious search-and-book run for a goal.
///
/// Pure and deterministic. Empty inputs are replaced with placeholder text.
///
/// # Examples
///
/// ```
/// use concierge_wizard::simulate;
///
/// let plan = simulate("A > B > Cを予約したい", "1010021");
/// assert!(plan.contains("東京都"));
/// assert!(plan.contains("Cを予約したい"));
/// ```
pub fn simulate(goal_path: &str, locality_code: &str) -> String {
    let path = goal_path.trim();
    let code = locality_code.trim();

    let target = path
        .rsplit(GOAL_PATH_SEPARATOR)
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_TARGET);
    let path = if path.is_empty() { MISSING_GOAL } else { path };
    let region = region_label(code);
    let code = if code.is_empty() { MISSING_CODE } else { code };

    format!(
        "【実行計画（シミュレーション）】\n\
         目標: {path}\n\
         地域: {region}（郵便番号 {code}）\n\
         \n\
         1. {region}周辺で「{target}」に対応できるお店・サービスを検索しました。\n\
         2. 評価と空き状況から候補を3件に絞り込みました。\n\
         3. 最上位の候補で「{target}」の予約を仮押さえしました。\n\
         \n\
         ※ これはシミュレーションです。実際の検索・予約・決済は行われていません。"
    )
}

/// [`PlanExecutor`] that runs [`simulate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanSimulator;

impl PlanExecutor for PlanSimulator {
    #[instrument(skip(self, goal), fields(locality = %goal.locality()))]
    fn execute(&self, goal: &GoalDescriptor) -> ConciergeResult<ExecutionResult> {
        let narrative = simulate(&goal.path(), goal.locality().as_str());
        debug!(narrative_length = narrative.len(), "Simulated execution");
        Ok(ExecutionResult::new(narrative))
    }
}
