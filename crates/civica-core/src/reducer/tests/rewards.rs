use super::*;
use pretty_assertions::assert_eq;

#[test]
fn purchase_debits_exactly_the_cost() {
    let mut state = logged_in(200);

    run_user(&mut state, UserAction::PurchaseReward { cost: 75 });

    assert_eq!(user_points(&state), 125);
}

#[test]
fn purchase_down_to_zero_is_allowed() {
    let mut state = logged_in(150);

    run_user(&mut state, UserAction::PurchaseReward { cost: 150 });

    assert_eq!(user_points(&state), 0);
}

#[test]
fn overdraft_is_rejected_and_balance_unchanged() {
    let mut state = logged_in(50);

    let err = reduce(
        &mut state,
        AppAction::User(UserAction::PurchaseReward { cost: 51 }),
    )
    .expect_err("overdraft");

    assert_eq!(
        err,
        TransitionError::InsufficientPoints {
            cost: 51,
            points: 50
        }
    );
    assert_eq!(user_points(&state), 50);
}

#[test]
fn zero_cost_purchase_is_a_plain_debit() {
    let mut state = logged_in(10);

    run_user(&mut state, UserAction::PurchaseReward { cost: 0 });

    assert_eq!(user_points(&state), 10);
}

#[test]
fn logged_out_purchase_is_a_no_op() {
    let mut state = state();

    let effects = run_user(&mut state, UserAction::PurchaseReward { cost: 500 });

    assert_eq!(state.session, Session::LoggedOut);
    assert_eq!(effects, vec![CivicaEffect::RequestFrame]);
}
