use tictactoe_engine::RandomSource;
use tictactoe_engine::tictactoe::{GameStatus, Player, Urgency};

pub const PRAISE: [&str; 4] = [
    "Nice move!",
    "That was the best you could do.",
    "Good call.",
    "You're making sharp choices!",
];

pub const CRITIQUE: [&str; 4] = [
    "Interesting choice... not optimal though.",
    "I would have gone somewhere else.",
    "You left an opening there.",
    "Hmm, not the best move.",
];

pub fn optimality_comment(optimal: bool, rng: &mut impl RandomSource) -> &'static str {
    let lines = if optimal { &PRAISE } else { &CRITIQUE };
    lines[rng.random_index(lines.len())]
}

/// Extra hint after a suboptimal move, when something was actually at stake.
pub fn missed_opportunity(urgency: Urgency) -> Option<&'static str> {
    match urgency {
        Urgency::Win => Some("You had a winning move there."),
        Urgency::Block => Some("You needed to block my line."),
        Urgency::Open => None,
    }
}

pub fn first_mover_announcement(first_mover: Player) -> String {
    let who = match first_mover {
        Player::Human => "you",
        Player::Opponent => "me",
    };
    format!("The first player is {} ({}).", first_mover.symbol(), who)
}

pub fn turn_announcement(player: Player) -> &'static str {
    match player {
        Player::Human => "It's your turn!",
        Player::Opponent => "Let me think...",
    }
}

pub fn result_announcement(status: GameStatus) -> Option<&'static str> {
    if !status.is_terminal() {
        return None;
    }
    Some(match status.winner() {
        Some(Player::Human) => "You won! Well played!",
        Some(Player::Opponent) => "I won! Good game!",
        None => "It's a draw!",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::SessionRng;

    #[test]
    fn test_optimal_move_gets_praise() {
        let mut rng = SessionRng::new(5);
        for _ in 0..20 {
            assert!(PRAISE.contains(&optimality_comment(true, &mut rng)));
        }
    }

    #[test]
    fn test_suboptimal_move_gets_critique() {
        let mut rng = SessionRng::new(5);
        for _ in 0..20 {
            assert!(CRITIQUE.contains(&optimality_comment(false, &mut rng)));
        }
    }

    #[test]
    fn test_missed_opportunity_only_when_something_was_at_stake() {
        assert!(missed_opportunity(Urgency::Win).is_some());
        assert!(missed_opportunity(Urgency::Block).is_some());
        assert_eq!(missed_opportunity(Urgency::Open), None);
    }

    #[test]
    fn test_announcements() {
        assert_eq!(first_mover_announcement(Player::Human), "The first player is X (you).");
        assert_eq!(first_mover_announcement(Player::Opponent), "The first player is O (me).");
        assert_eq!(turn_announcement(Player::Opponent), "Let me think...");
        assert_eq!(result_announcement(GameStatus::InProgress), None);
        assert_eq!(result_announcement(GameStatus::Draw), Some("It's a draw!"));
        assert_eq!(
            result_announcement(GameStatus::Won(Player::Human)),
            Some("You won! Well played!")
        );
        assert_eq!(
            result_announcement(GameStatus::Won(Player::Opponent)),
            Some("I won! Good game!")
        );
    }
}
