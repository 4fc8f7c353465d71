//! Greetings for members who join the group.

use crate::core::User;

/// Name used when a member has no usable first name ("newcomer").
pub const NEWCOMER_PLACEHOLDER: &str = "новачок";

/// Greeting for one member, addressed by first name or [`NEWCOMER_PLACEHOLDER`].
pub fn greeting_for(member: &User) -> String {
    let name = member.display_name().unwrap_or(NEWCOMER_PLACEHOLDER);
    format!(
        "Ласкаво просимо в групу, {}! 🎉 Якщо маєш питання по Clash of Clans — пиши мені!",
        name
    )
}

/// One greeting per member, in join order. No dedup and no cap.
pub fn greetings(members: &[User]) -> Vec<String> {
    members.iter().map(greeting_for).collect()
}
