//! Integration tests for the round actor and its handle.

mod common;

use common::{
    RecordingPresenter, ScriptedWallet, auth_response, end_round_response, money, play_response,
    round, server_error,
};
use domino_bash::{
    round::{
        BetDirection, BetLadder, PlayFlags, PlayStart, RoundActor, RoundError, RoundEvent,
        RoundHandle, RoundMachine, RoundSettlement, RoundState,
    },
    session::Session,
};
use std::sync::Arc;

fn spawn_actor(wallet: &Arc<ScriptedWallet>, presenter: Arc<RecordingPresenter>) -> RoundHandle {
    let machine = RoundMachine::new(
        wallet.clone(),
        Session::new("actor-session", "http://rgs.test"),
        BetLadder::default(),
    );
    RoundActor::spawn(machine, presenter)
}

#[tokio::test]
async fn test_full_winning_round_through_handle() {
    let wallet = Arc::new(ScriptedWallet::new());
    wallet.push_auth(Ok(auth_response(5_000_000, None, Some(vec![500_000, 1_000_000]))));
    wallet.push_play(Ok(play_response(3.0, 4_000_000)));
    wallet.push_end_round(Ok(end_round_response(7_000_000)));
    let presenter = Arc::new(RecordingPresenter::default());
    let handle = spawn_actor(&wallet, presenter.clone());

    assert_eq!(handle.authenticate().await.unwrap(), RoundState::Menu);
    assert_eq!(handle.enter_idle().await.unwrap(), RoundState::Idle);
    assert!(!handle.adjust_bet(BetDirection::Increase).await.unwrap());

    let started = handle.start_play(PlayFlags::default()).await.unwrap();
    assert!(matches!(started, PlayStart::Placed(_)));

    let settlement = handle.presentation_complete().await.unwrap();
    assert_eq!(
        settlement,
        RoundSettlement::Won {
            amount: money(3_000_000),
            server_balance: Some(money(7_000_000)),
        }
    );
    assert_eq!(presenter.shown(), vec![money(3_000_000)]);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, RoundState::Idle);
    assert_eq!(snapshot.balance, money(7_000_000));
    assert_eq!(snapshot.bet, money(1_000_000));
    assert_eq!(snapshot.bet_levels, vec![money(500_000), money(1_000_000)]);
}

#[tokio::test]
async fn test_auth_failure_is_reported_through_handle() {
    let wallet = Arc::new(ScriptedWallet::new());
    wallet.push_auth(Err(server_error()));
    let handle = spawn_actor(&wallet, Arc::default());
    let mut subscription = handle.subscribe().await.unwrap();

    let err = handle.authenticate().await.unwrap_err();

    assert!(matches!(err, RoundError::Wallet(_)));
    let event = subscription.events.recv().await.unwrap();
    assert!(matches!(event, RoundEvent::AuthenticationFailed(_)));
    assert_eq!(
        handle.snapshot().await.unwrap().state,
        RoundState::Authenticating
    );
}

#[tokio::test]
async fn test_subscribers_follow_the_round() {
    let wallet = Arc::new(ScriptedWallet::new());
    wallet.push_auth(Ok(auth_response(2_000_000, None, None)));
    let handle = spawn_actor(&wallet, Arc::default());
    let mut subscription = handle.subscribe().await.unwrap();

    handle.authenticate().await.unwrap();

    assert_eq!(
        subscription.drain(),
        vec![
            RoundEvent::BalanceChanged(money(2_000_000)),
            RoundEvent::StateChanged(RoundState::Menu),
            RoundEvent::AuthenticationComplete,
        ]
    );

    assert!(handle.unsubscribe(subscription.id).await.unwrap());
    handle.enter_idle().await.unwrap();
    assert!(subscription.drain().is_empty());
}

#[tokio::test]
async fn test_resolve_active_round_through_handle() {
    let wallet = Arc::new(ScriptedWallet::new());
    wallet.push_auth(Ok(auth_response(1_000_000, Some(round(true, 1.5)), None)));
    wallet.push_end_round(Ok(end_round_response(2_500_000)));
    let presenter = Arc::new(RecordingPresenter::default());
    let handle = spawn_actor(&wallet, presenter.clone());

    assert_eq!(
        handle.authenticate().await.unwrap(),
        RoundState::ResolvingRound
    );
    let settlement = handle.resolve_active_round().await.unwrap();

    assert_eq!(
        settlement,
        RoundSettlement::Won {
            amount: money(1_500_000),
            server_balance: Some(money(2_500_000)),
        }
    );
    assert_eq!(presenter.shown(), vec![money(1_500_000)]);
    assert_eq!(handle.snapshot().await.unwrap().state, RoundState::Idle);
}

#[tokio::test]
async fn test_concurrent_plays_are_serialised() {
    let wallet = Arc::new(ScriptedWallet::new());
    wallet.push_auth(Ok(auth_response(5_000_000, None, None)));
    wallet.push_play(Ok(play_response(0.0, 4_000_000)));
    let handle = spawn_actor(&wallet, Arc::default());
    handle.authenticate().await.unwrap();
    handle.enter_idle().await.unwrap();

    let (first, second) = tokio::join!(
        handle.start_play(PlayFlags::default()),
        handle.start_play(PlayFlags::default()),
    );
    let results = [first.unwrap(), second.unwrap()];

    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, PlayStart::Placed(_)))
            .count(),
        1
    );
    assert!(results.contains(&PlayStart::Ignored));
    assert_eq!(wallet.play_calls(), 1);
    assert_eq!(handle.snapshot().await.unwrap().balance, money(4_000_000));
}

#[tokio::test]
async fn test_handle_reports_closed_actor_after_shutdown() {
    let wallet = Arc::new(ScriptedWallet::new());
    let machine = RoundMachine::new(
        wallet.clone(),
        Session::new("actor-session", "http://rgs.test"),
        BetLadder::default(),
    );
    let (actor, handle) = RoundActor::new(machine, Arc::new(RecordingPresenter::default()));
    let task = tokio::spawn(actor.run());

    handle.shutdown().await.unwrap();
    let machine = task.await.unwrap();

    assert_eq!(machine.state(), RoundState::Authenticating);
    assert!(matches!(
        handle.snapshot().await,
        Err(RoundError::ActorClosed)
    ));
}
