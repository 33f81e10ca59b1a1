//! Player physics integrator
//!
//! One call per tick. The update order matters and mirrors the original
//! game's frame: horizontal move + clamp, gravity, vertical move + ground
//! snap, then the held-key velocity for the *next* tick. Horizontal input
//! therefore takes effect one frame after the key goes down.

use super::state::{Facing, Player};
use super::tick::TickInput;
use crate::consts::*;

/// Advance the player by one tick.
pub fn integrate_player(player: &mut Player, input: &TickInput) {
    // Jump on the rising edge only, and only while grounded.
    if input.jump && !player.jumping {
        player.vel.y = JUMP_STRENGTH;
        player.jumping = true;
    }

    // Horizontal: apply last tick's velocity, clamp to the playfield.
    player.pos.x = (player.pos.x + player.vel.x).clamp(0.0, GAME_WIDTH - PLAYER_WIDTH);

    // Vertical: gravity accumulates every tick with no terminal cap, then
    // the position integrates. Feet at or below the ground line snap back.
    player.vel.y += GRAVITY;
    player.pos.y += player.vel.y;
    if player.pos.y >= GROUND_Y - PLAYER_HEIGHT {
        player.pos.y = GROUND_Y - PLAYER_HEIGHT;
        player.vel.y = 0.0;
        player.jumping = false;
    }

    // Recompute horizontal velocity from held keys. Left is checked first,
    // so right wins when both are held. Facing follows the last nonzero
    // input.
    player.vel.x = 0.0;
    if input.left {
        player.vel.x = -PLAYER_SPEED;
        player.facing = Facing::Left;
    }
    if input.right {
        player.vel.x = PLAYER_SPEED;
        player.facing = Facing::Right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(left: bool, right: bool) -> TickInput {
        TickInput { left, right, ..Default::default() }
    }

    #[test]
    fn test_idle_player_stays_on_ground() {
        let mut player = Player::new();
        integrate_player(&mut player, &TickInput::default());
        assert_eq!(player.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_held_key_moves_one_tick_later() {
        let mut player = Player::new();
        let start_x = player.pos.x;

        // First tick with the key down sets velocity but moves nothing.
        integrate_player(&mut player, &held(false, true));
        assert_eq!(player.pos.x, start_x);
        assert_eq!(player.vel.x, PLAYER_SPEED);
        assert_eq!(player.facing, Facing::Right);

        // Second tick applies it.
        integrate_player(&mut player, &held(false, true));
        assert_eq!(player.pos.x, start_x + PLAYER_SPEED);
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let mut player = Player::new();
        integrate_player(&mut player, &held(true, true));
        assert_eq!(player.vel.x, PLAYER_SPEED);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_horizontal_clamp_at_left_edge() {
        let mut player = Player::new();
        player.pos.x = 2.0;
        player.vel.x = -PLAYER_SPEED;
        integrate_player(&mut player, &held(true, false));
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = Player::new();
        let jump = TickInput { jump: true, ..Default::default() };
        integrate_player(&mut player, &jump);
        assert!(player.jumping);
        // First airborne frame: jump strength plus one gravity step.
        assert_eq!(player.vel.y, JUMP_STRENGTH + GRAVITY);
        assert!(player.pos.y < GROUND_Y - PLAYER_HEIGHT);

        // Gravity brings the player back down and clears the flag.
        for _ in 0..200 {
            integrate_player(&mut player, &TickInput::default());
        }
        assert_eq!(player.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert!(!player.jumping);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_no_double_jump_while_airborne() {
        let mut player = Player::new();
        let jump = TickInput { jump: true, ..Default::default() };
        integrate_player(&mut player, &jump);
        let rising_vel = player.vel.y;

        // A second jump edge mid-air must not reset vertical velocity.
        integrate_player(&mut player, &jump);
        assert_eq!(player.vel.y, rising_vel + GRAVITY);
    }

    proptest! {
        #[test]
        fn prop_player_never_leaves_playfield(inputs in proptest::collection::vec(
            (any::<bool>(), any::<bool>(), any::<bool>()), 0..300
        )) {
            let mut player = Player::new();
            for (left, right, jump) in inputs {
                let input = TickInput { left, right, jump, ..Default::default() };
                integrate_player(&mut player, &input);
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x <= GAME_WIDTH - PLAYER_WIDTH);
                prop_assert!(player.pos.y <= GROUND_Y - PLAYER_HEIGHT);
            }
        }
    }
}
