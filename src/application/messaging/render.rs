//! Reply rendering - Turns outcomes into chat messages

use crate::domain::entities::{Category, Item, ItemState, Outcome, Reply};

pub const HELP_TEXT: &str = "사용법 예시:\n\
- `/대여 현황` : 현재 대여 현황 보기\n\
- `/대여 대여 우산 (이름)` : 남는 우산을 본인 이름으로 대여\n\
- `/대여 반납 우산 (이름)` : 본인이 대여한 우산 반납\n\
- `/대여 전달 우산 (내 이름) (전달한 사람 이름)` : 본인 우산을 해당 사용자에게 양도\n\
\n*규칙: 한 사람이 같은 종류(카테고리)에서는 1개만 대여 가능*\n";

pub fn help() -> Reply {
    Reply::ephemeral(HELP_TEXT)
}

pub fn unknown_category(raw: &str) -> Reply {
    Reply::ephemeral(format!("알 수 없는 물품 종류입니다: {}", raw))
}

/// Render an inventory outcome.
///
/// Status and successful changes go to the whole channel; refusals only to the requester.
pub fn render(outcome: &Outcome) -> Reply {
    match outcome {
        Outcome::Status(items) => Reply::in_channel(status_table(items)),
        Outcome::Rented { item, holder } => {
            Reply::in_channel(format!("대여 완료: {} → {}", item.name, holder))
        }
        Outcome::AlreadyHolding { category, holder, item } => Reply::ephemeral(format!(
            "{}님은 이미 {} 카테고리에서 '{}'을(를) 대여 중입니다.",
            holder, category, item.name
        )),
        Outcome::NoneAvailable { category } => Reply::ephemeral(format!(
            "{} 카테고리에 현재 대여 가능한 아이템이 없습니다.",
            category
        )),
        Outcome::Returned { item, holder } => {
            Reply::in_channel(format!("반납 완료: {} ← {}", item.name, holder))
        }
        Outcome::NothingToReturn { category, holder } => Reply::ephemeral(format!(
            "{}님은 {} 카테고리에 대여 중인 물품이 없습니다.",
            holder, category
        )),
        Outcome::Transferred { item, from, to } => Reply::in_channel(format!(
            "전달 완료: {} → {} (from {})",
            item.name, to, from
        )),
        Outcome::NothingToTransfer { category, from } => Reply::ephemeral(format!(
            "{}님은 {} 카테고리에 대여 중인 물품이 없습니다.",
            from, category
        )),
        Outcome::RecipientHolding { category, to, item } => Reply::ephemeral(format!(
            "{}님은 이미 {} 카테고리에서 '{}'을(를) 보유 중이어서 전달할 수 없습니다.",
            to, category, item.name
        )),
    }
}

fn status_table(items: &[Item]) -> String {
    let mut lines = vec!["**대여 현황**".to_string()];
    if items.is_empty() {
        lines.push("_아직 등록된 물품이 없습니다_".to_string());
        return lines.join("\n");
    }

    // Items arrive sorted by category, so a change of category starts a new group
    let mut current: Option<&str> = None;
    for item in items {
        if current != Some(item.category.as_str()) {
            current = Some(item.category.as_str());
            lines.push(format!("\n- **{}**", Category::label_for_code(&item.category)));
        }
        let holder = match item.state() {
            ItemState::Held(holder) => holder,
            ItemState::Unheld => "_(대여 가능)_",
        };
        lines.push(format!("  - {} → {}", item.name, holder));
    }
    lines.join("\n")
}
