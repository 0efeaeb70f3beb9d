use super::*;
use super::test_helpers::{ScriptedApi, test_state, test_state_with_mirrors};

#[test]
fn readiness_is_the_and_of_all_three_flags() {
    let flags = LoadingFlags::default();
    assert!(!flags.ready());

    flags.settle(Dataset::History);
    assert!(!flags.ready());

    flags.settle(Dataset::Workers);
    assert!(!flags.ready());

    flags.settle(Dataset::Bikes);
    assert!(flags.ready());
}

#[test]
fn settling_one_dataset_leaves_the_others_untouched() {
    let flags = LoadingFlags::default();
    flags.settle(Dataset::Bikes);

    assert!(flags.settled(Dataset::Bikes));
    assert!(!flags.settled(Dataset::History));
    assert!(!flags.settled(Dataset::Workers));
}

#[tokio::test]
async fn fresh_state_is_empty_and_not_ready() {
    let (state, _dir) = test_state(ScriptedApi::default());

    assert!(state.workers.list().await.is_empty());
    assert!(state.bikes.list().await.is_empty());
    assert!(state.history.read().await.is_empty());
    assert!(state.forecast.read().await.is_none());
    assert!(state.fatal.read().await.is_none());
    assert!(!state.loading.ready());
}

#[tokio::test]
async fn mirrored_collections_settle_their_datasets_immediately() {
    let (state, _dir) =
        test_state_with_mirrors(ScriptedApi::default(), Some(crate::mock::workers()), Some(crate::mock::bikes()));

    assert_eq!(state.workers.list().await.len(), 5);
    assert_eq!(state.bikes.list().await.len(), 8);
    assert!(state.loading.settled(Dataset::Workers));
    assert!(state.loading.settled(Dataset::Bikes));
    assert!(!state.loading.settled(Dataset::History));
    assert!(!state.loading.ready());
}
