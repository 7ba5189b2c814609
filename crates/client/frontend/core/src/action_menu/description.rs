//! Info panel text for an inspected subject.

use std::borrow::Cow;

use super::SubjectInfo;

/// Width of the attack column, so defense values line up.
const COLUMN_WIDTH: usize = 18;

/// Returns the custom description verbatim, or the stat summary when it is
/// absent or empty.
///
/// Values are inserted with their plain `Display` form.
pub fn compose_description(subject: &SubjectInfo) -> Cow<'_, str> {
    match subject.custom_description.as_deref() {
        Some(custom) if !custom.is_empty() => Cow::Borrowed(custom),
        _ => Cow::Owned(stat_summary(subject)),
    }
}

fn stat_summary(subject: &SubjectInfo) -> String {
    let attack = &subject.attack_stats;
    let defense = &subject.defense_stats;
    let bonuses = &subject.bonuses;

    let rows = [
        ("Attack Stats:".to_string(), "Defense Stats:".to_string()),
        (format!("Crush: {}", attack.crush), format!("Crush: {}", defense.crush)),
        (format!("Slash: {}", attack.slash), format!("Slash: {}", defense.slash)),
        (format!("Stab: {}", attack.stab), format!("Stab: {}", defense.stab)),
        (format!("Magic: {}", attack.magic), format!("Magic: {}", defense.magic)),
    ];

    let mut text = String::new();
    for (left, right) in rows {
        text.push_str(&format!("{left:<COLUMN_WIDTH$}{right}\n"));
    }

    text.push_str("Bonuses:\n");
    text.push_str(&format!("Accuracy: {}\n", bonuses.accuracy));
    text.push_str(&format!("Strength: {}\n", bonuses.strength));
    text.push_str(&format!("Archery: {}\n", bonuses.archery));
    text.push_str(&format!("Magic: {}", bonuses.magic));
    text
}
