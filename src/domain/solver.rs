//! Optimal move sequence for a Hanoi tower.

use super::rod::RodId;

/// The 2ⁿ−1 moves that carry a tower of `disk_count` disks from `from`
/// to `to`, smallest disk first.
pub fn optimal_moves(disk_count: u8, from: RodId, to: RodId) -> Vec<(RodId, RodId)> {
    let capacity = 1usize.checked_shl(u32::from(disk_count)).map_or(0, |n| n - 1);
    let mut moves = Vec::with_capacity(capacity);
    if from != to {
        push_moves(disk_count, from, to, &mut moves);
    }
    moves
}

fn push_moves(disks: u8, from: RodId, to: RodId, moves: &mut Vec<(RodId, RodId)>) {
    if disks == 0 {
        return;
    }
    let via = from.spare(to);
    push_moves(disks - 1, from, via, moves);
    moves.push((from, to));
    push_moves(disks - 1, via, to, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HanoiGame;

    #[test]
    fn test_move_count() {
        for n in 1..=6 {
            assert_eq!(optimal_moves(n, RodId::Left, RodId::Right).len(), (1 << n) - 1);
        }
    }

    #[test]
    fn test_same_rod_needs_no_moves() {
        assert!(optimal_moves(3, RodId::Middle, RodId::Middle).is_empty());
    }

    #[test]
    fn test_three_disk_sequence() {
        use RodId::*;
        assert_eq!(
            optimal_moves(3, Left, Right),
            vec![
                (Left, Right),
                (Left, Middle),
                (Right, Middle),
                (Left, Right),
                (Middle, Left),
                (Middle, Right),
                (Left, Right),
            ]
        );
    }

    #[test]
    fn test_moves_solve_the_game() {
        for n in 1..=6 {
            let mut game = HanoiGame::new(n).unwrap();
            let moves = optimal_moves(n, RodId::Left, RodId::Middle);
            let last = moves.len() - 1;

            for (i, (from, to)) in moves.into_iter().enumerate() {
                game.touch_rod(from);
                assert_eq!(game.touch_rod(to), i == last);
            }
        }
    }
}
