//! Property-based tests for the farming counter and rewards reducer
//!
//! Uses proptest to verify the counter bounds and the action invariants.

use impcton_core::{Action, FarmingCounter, RewardsConfig, RewardsState, UserProfile};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Page actions a user or timer can produce once the profile is ready
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => Just(Action::FarmTick),
        1 => Just(Action::OpenUpgrade),
        1 => Just(Action::CancelUpgrade),
        1 => Just(Action::ConfirmUpgrade),
        1 => Just(Action::ConnectWallet),
        1 => "[A-Z0-9-]{0,12}".prop_map(Action::EditReferral),
        1 => Just(Action::ApplyReferral),
        1 => (0u64..20).prop_map(Action::DismissNotification),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After n ticks the balance is min(seed + n, 1000)
    #[test]
    fn ticks_add_up_to_ceiling(seed in 0u32..=1000, n in 0u32..2000) {
        let mut counter = FarmingCounter::new(seed);
        for _ in 0..n {
            counter.tick();
        }
        prop_assert_eq!(counter.tokens(), (seed + n).min(1000));
    }

    /// The balance never decreases and never passes the ceiling
    #[test]
    fn counter_is_monotonic_and_bounded(seed in 0u32..=1000, n in 0usize..1500) {
        let mut counter = FarmingCounter::new(seed);
        let mut previous = counter.tokens();
        for _ in 0..n {
            let current = counter.tick();
            prop_assert!(current >= previous);
            prop_assert!(current <= 1000);
            previous = current;
        }
    }

    /// Batch advance agrees with repeated ticks
    #[test]
    fn advance_matches_ticks(seed in 0u32..=1000, n in 0u32..1500) {
        let mut ticked = FarmingCounter::new(seed);
        for _ in 0..n {
            ticked.tick();
        }
        let mut advanced = FarmingCounter::new(seed);
        advanced.advance(n);
        prop_assert_eq!(ticked, advanced);
    }

    /// No sequence of actions lowers the balance or leaves it out of bounds,
    /// and the dialog is only ever open with enough tokens
    #[test]
    fn actions_never_deduct_tokens(
        seed in 0u32..=1000,
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::ProfileLoaded(UserProfile::new("Ana", 1, seed)));

        let mut previous = state.tokens().unwrap();
        for action in actions {
            state.update(action);
            let tokens = state.tokens().unwrap();
            prop_assert!(tokens >= previous);
            prop_assert!(tokens <= 1000);
            if state.dialog().is_open() {
                prop_assert!(tokens >= state.upgrade_cost());
            }
            previous = tokens;
        }
    }

    /// Upgrade is available exactly when the balance reaches the cost
    #[test]
    fn upgrade_gate_matches_cost(seed in 0u32..=1000) {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::ProfileLoaded(UserProfile::new("Ana", 1, seed)));
        prop_assert_eq!(state.can_upgrade(), seed >= 100);
    }

    /// Applying a non-empty code echoes it verbatim
    #[test]
    fn referral_message_echoes_code(code in "\\PC{1,40}") {
        let mut state = RewardsState::new(&RewardsConfig::default());
        state.update(Action::ProfileLoaded(UserProfile::new("Ana", 1, 0)));
        state.update(Action::EditReferral(code.clone()));
        prop_assert!(state.update(Action::ApplyReferral).is_some());
        prop_assert!(state.notification().message().contains(&code));
    }
}
