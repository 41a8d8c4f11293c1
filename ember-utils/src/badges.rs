/// Which profile counter a badge rule inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeField {
    Xp,
    Level,
    Messages,
}

/// A badge is earned once the inspected counter reaches its threshold.
#[derive(Clone, Copy, Debug)]
pub struct BadgeRule {
    pub name: &'static str,
    pub field: BadgeField,
    pub threshold: i64,
}

pub const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        name: "Chatterbox",
        field: BadgeField::Messages,
        threshold: 1000,
    },
    BadgeRule {
        name: "Night Owl",
        field: BadgeField::Xp,
        threshold: 5000,
    },
    BadgeRule {
        name: "Event Master",
        field: BadgeField::Level,
        threshold: 10,
    },
];

impl BadgeRule {
    pub fn earned(&self, xp: i64, level: i64, messages: i64) -> bool {
        let value = match self.field {
            BadgeField::Xp => xp,
            BadgeField::Level => level,
            BadgeField::Messages => messages,
        };

        value >= self.threshold
    }
}

/// Evaluate every rule in [`BADGE_RULES`] against the given counters.
pub fn earned_badges(xp: i64, level: i64, messages: i64) -> Vec<&'static str> {
    BADGE_RULES
        .iter()
        .filter(|rule| rule.earned(xp, level, messages))
        .map(|rule| rule.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::earned_badges;

    #[test]
    fn chatterbox_only_at_message_threshold() {
        assert_eq!(earned_badges(0, 1, 1000), vec!["Chatterbox"]);
    }

    #[test]
    fn no_badges_below_every_threshold() {
        assert!(earned_badges(4999, 9, 999).is_empty());
    }

    #[test]
    fn all_badges_at_their_thresholds() {
        assert_eq!(
            earned_badges(5000, 10, 1000),
            vec!["Chatterbox", "Night Owl", "Event Master"]
        );
    }

    #[test]
    fn rules_are_independent() {
        assert_eq!(earned_badges(5000, 1, 0), vec!["Night Owl"]);
        assert_eq!(earned_badges(0, 10, 0), vec!["Event Master"]);
    }
}
