//! Playback engine — reacts to UI snapshots by driving the play/pause cycle.
//!
//! The engine consumes snapshots tagged with the originating application
//! and timer commands fed back by the scheduler, and moves the session
//! through `Idle → SleepingBefore → Playing → SleepingAfter → NotRunning`.
//! A control node missing from a snapshot is never an error: the only
//! effect is the `buttons_hidden` flag, and the next snapshot retries
//! naturally because the host re-delivers on every UI change.

use playloop_domain::controls::ControlIds;
use playloop_domain::elapsed;
use playloop_domain::error::PlayLoopError;
use playloop_domain::node::UiNode;
use playloop_domain::phase::Phase;
use playloop_domain::session::Session;
use playloop_domain::snapshot::{PackageName, Snapshot};
use playloop_domain::timer::{TimerAction, TimerCommand};

use crate::ports::{ActionDriver, Clock, TimerScheduler};

/// Minimum seconds playback must have been running before a pause is allowed.
const MIN_PLAYING_SECS: i64 = 2;

/// Reactive playback state machine.
pub struct PlaybackEngine<D, S, C> {
    target: PackageName,
    controls: ControlIds,
    driver: D,
    scheduler: S,
    clock: C,
}

impl<D, S, C> PlaybackEngine<D, S, C>
where
    D: ActionDriver,
    S: TimerScheduler,
    C: Clock,
{
    /// Create a new engine watching `target`.
    pub fn new(target: PackageName, controls: ControlIds, driver: D, scheduler: S, clock: C) -> Self {
        Self {
            target,
            controls,
            driver,
            scheduler,
            clock,
        }
    }

    /// Process one UI snapshot against the current session.
    ///
    /// Snapshots from any application other than the target are ignored
    /// entirely: no phase change, no side effect.
    ///
    /// # Errors
    ///
    /// Returns a dispatch error if a tap or timer registration fails.
    pub async fn handle_snapshot(
        &self,
        session: &mut Session,
        snapshot: &Snapshot,
    ) -> Result<(), PlayLoopError> {
        if snapshot.package != self.target {
            tracing::trace!(package = %snapshot.package, "ignoring foreign snapshot");
            return Ok(());
        }

        match session.phase {
            Phase::Idle => self.process_idle(session, &snapshot.root).await,
            Phase::SleepingBefore => self.process_sleeping_before(session, &snapshot.root).await,
            Phase::Playing => self.process_playing(session, &snapshot.root).await,
            Phase::Paused => {
                tracing::trace!("paused, skipping snapshot");
                Ok(())
            }
            Phase::SleepingAfter | Phase::NotRunning => Ok(()),
        }
    }

    /// Process a timer command once its delay has elapsed.
    ///
    /// Commands registered during an earlier cycle are dropped without any
    /// side effect.
    ///
    /// # Errors
    ///
    /// Returns a dispatch error if a tap, relaunch, or timer registration
    /// fails.
    pub async fn handle_timer(
        &self,
        session: &mut Session,
        command: TimerCommand,
    ) -> Result<(), PlayLoopError> {
        if session.is_stale(command.epoch) {
            tracing::debug!(
                epoch = %command.epoch,
                action = %command.action,
                "dropping timer from earlier cycle"
            );
            return Ok(());
        }

        match command.action {
            TimerAction::PressPlay { root } => self.press_play(session, &root).await,
            TimerAction::Relaunch => self.relaunch(session).await,
        }
    }

    /// Idle: the target app just opened with the video autoplaying. Tap
    /// pause to hold it until the scheduled play.
    async fn process_idle(
        &self,
        session: &mut Session,
        root: &UiNode,
    ) -> Result<(), PlayLoopError> {
        self.reveal_controls(session, root).await?;

        let Some(control) = root.find_by_id(&self.controls.play_pause) else {
            session.buttons_hidden = true;
            return Ok(());
        };

        if description_contains(control, "pause") {
            self.driver.tap(control).await?;
            session.phase = Phase::SleepingBefore;
            tracing::info!(session = %session.id, "paused on entry, sleeping before play");
        }
        Ok(())
    }

    /// `SleepingBefore`: schedule the delayed play exactly once.
    async fn process_sleeping_before(
        &self,
        session: &mut Session,
        root: &UiNode,
    ) -> Result<(), PlayLoopError> {
        if session.waiting_to_play {
            return Ok(());
        }

        // The flag must flip before the timer is registered, otherwise a
        // snapshot arriving in between would schedule a second play.
        session.waiting_to_play = true;
        let command = TimerCommand::press_play(session.epoch(), root.clone());
        self.scheduler
            .schedule(session.durations.before_play_delay(), command)
            .await?;
        tracing::debug!(
            session = %session.id,
            delay_secs = session.durations.before_play,
            "scheduled delayed play"
        );
        Ok(())
    }

    /// Playing: watch the elapsed counter and pause once the configured
    /// play time has been reached.
    async fn process_playing(
        &self,
        session: &mut Session,
        root: &UiNode,
    ) -> Result<(), PlayLoopError> {
        self.reveal_controls(session, root).await?;

        let Some(counter) = root.find_by_description_containing("elapsed") else {
            session.buttons_hidden = true;
            return Ok(());
        };

        let description = counter.description.as_deref().unwrap_or_default();
        let lead = description.split("elapsed").next().unwrap_or_default();
        let Some(seconds) = elapsed::parse(lead) else {
            return Ok(());
        };
        tracing::trace!(seconds, "elapsed counter read");

        if seconds < session.durations.play || !self.past_minimum_playing(session) {
            return Ok(());
        }

        let Some(control) = root.find_by_id(&self.controls.play_pause) else {
            session.buttons_hidden = true;
            return Ok(());
        };

        if description_contains(control, "pause") {
            self.driver.tap(control).await?;
            session.phase = Phase::SleepingAfter;
            self.scheduler
                .schedule(
                    session.durations.after_play_delay(),
                    TimerCommand::relaunch(session.epoch()),
                )
                .await?;
            tracing::info!(
                session = %session.id,
                seconds,
                "paused after play time, sleeping before relaunch"
            );
        }
        Ok(())
    }

    /// The delayed play fired: tap play if the control shows it, then enter
    /// `Playing` regardless of the locate outcome.
    async fn press_play(&self, session: &mut Session, root: &UiNode) -> Result<(), PlayLoopError> {
        self.reveal_controls(session, root).await?;

        match root.find_by_id(&self.controls.play_pause) {
            Some(control) => {
                if description_contains(control, "play") {
                    self.driver.tap(control).await?;
                }
            }
            None => session.buttons_hidden = true,
        }

        session.phase = Phase::Playing;
        session.started_at = Some(self.clock.now());
        session.waiting_to_play = false;
        tracing::info!(session = %session.id, "playing");
        Ok(())
    }

    /// The delayed relaunch fired: bring the controller forward and rest.
    async fn relaunch(&self, session: &mut Session) -> Result<(), PlayLoopError> {
        self.driver.launch_controller().await?;
        tracing::info!(session = %session.id, "cycle finished, controller relaunched");
        session.finish_cycle();
        Ok(())
    }

    /// Tap the video surface when the controls are believed hidden, then
    /// clear the flag. Runs at the top of every phase that reads the tree.
    async fn reveal_controls(
        &self,
        session: &mut Session,
        root: &UiNode,
    ) -> Result<(), PlayLoopError> {
        if !session.buttons_hidden {
            return Ok(());
        }
        if let Some(surface) = root.find_by_id(&self.controls.surface) {
            self.driver.tap(surface).await?;
            tracing::debug!(session = %session.id, "tapped surface to reveal controls");
        }
        session.buttons_hidden = false;
        Ok(())
    }

    fn past_minimum_playing(&self, session: &Session) -> bool {
        session
            .started_at
            .is_some_and(|started| {
                self.clock.now() > started + chrono::Duration::seconds(MIN_PLAYING_SECS)
            })
    }
}

/// Whether the node's description contains `needle`, ignoring case and
/// surrounding whitespace.
fn description_contains(node: &UiNode, needle: &str) -> bool {
    node.description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().trim().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use std::time::Duration;

    use playloop_domain::node::ViewId;
    use playloop_domain::session::Durations;
    use playloop_domain::time::Timestamp;

    const TARGET: &str = "com.example.player";
    const PLAY_PAUSE: &str = "player/control_play_pause";
    const SURFACE: &str = "player/surface";

    // ── Spy driver ─────────────────────────────────────────────────

    #[derive(Default)]
    struct SpyDriver {
        taps: Mutex<Vec<UiNode>>,
        launches: Mutex<usize>,
    }

    impl SpyDriver {
        fn tapped_ids(&self) -> Vec<String> {
            self.taps
                .lock()
                .unwrap()
                .iter()
                .filter_map(|node| node.view_id.as_ref().map(ToString::to_string))
                .collect()
        }

        fn tap_count(&self) -> usize {
            self.taps.lock().unwrap().len()
        }

        fn launch_count(&self) -> usize {
            *self.launches.lock().unwrap()
        }
    }

    impl ActionDriver for SpyDriver {
        fn tap(&self, node: &UiNode) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
            self.taps.lock().unwrap().push(node.clone());
            async { Ok(()) }
        }

        fn launch_controller(&self) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
            *self.launches.lock().unwrap() += 1;
            async { Ok(()) }
        }
    }

    // ── Fake scheduler ─────────────────────────────────────────────

    #[derive(Default)]
    struct FakeScheduler {
        scheduled: Mutex<Vec<(Duration, TimerCommand)>>,
    }

    impl FakeScheduler {
        fn count(&self) -> usize {
            self.scheduled.lock().unwrap().len()
        }

        fn take(&self) -> Vec<(Duration, TimerCommand)> {
            std::mem::take(&mut self.scheduled.lock().unwrap())
        }
    }

    impl TimerScheduler for FakeScheduler {
        fn schedule(
            &self,
            delay: Duration,
            command: TimerCommand,
        ) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
            self.scheduled.lock().unwrap().push((delay, command));
            async { Ok(()) }
        }
    }

    // ── Fixed clock ────────────────────────────────────────────────

    struct FixedClock {
        now: Timestamp,
    }

    impl FixedClock {
        fn at(now: Timestamp) -> Self {
            Self { now }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.now
        }
    }

    // ── Helpers ────────────────────────────────────────────────────

    fn make_engine(now: Timestamp) -> PlaybackEngine<SpyDriver, FakeScheduler, FixedClock> {
        PlaybackEngine::new(
            PackageName::new(TARGET).unwrap(),
            ControlIds {
                play_pause: ViewId::new(PLAY_PAUSE),
                surface: ViewId::new(SURFACE),
            },
            SpyDriver::default(),
            FakeScheduler::default(),
            FixedClock::at(now),
        )
    }

    fn session_in(phase: Phase, durations: Durations) -> Session {
        let mut session = Session::new(durations);
        session.begin_cycle();
        session.phase = phase;
        session
    }

    fn player_tree(play_pause_label: &str, elapsed: Option<&str>) -> UiNode {
        let mut root = UiNode::new()
            .with_child(UiNode::new().with_view_id(SURFACE))
            .with_child(
                UiNode::new()
                    .with_view_id(PLAY_PAUSE)
                    .with_description(play_pause_label),
            );
        if let Some(text) = elapsed {
            root = root.with_child(UiNode::new().with_description(format!("{text} elapsed")));
        }
        root
    }

    fn snapshot_of(root: UiNode) -> Snapshot {
        Snapshot::new(PackageName::new(TARGET).unwrap(), root)
    }

    fn foreign_snapshot(root: UiNode) -> Snapshot {
        Snapshot::new(PackageName::new("com.example.other").unwrap(), root)
    }

    fn seconds_ago(now: Timestamp, seconds: i64) -> Timestamp {
        now - chrono::Duration::seconds(seconds)
    }

    // ── Foreign snapshots ──────────────────────────────────────────

    #[tokio::test]
    async fn should_ignore_snapshot_from_foreign_package() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());

        let snapshot = foreign_snapshot(player_tree("Pause video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(engine.driver.tap_count(), 0);
        assert!(!session.buttons_hidden);
    }

    // ── Idle ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn should_pause_and_sleep_when_idle_and_video_playing() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());

        let snapshot = snapshot_of(player_tree("Pause video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::SleepingBefore);
        assert_eq!(engine.driver.tapped_ids(), vec![PLAY_PAUSE.to_string()]);
    }

    #[tokio::test]
    async fn should_set_buttons_hidden_when_idle_and_control_missing() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());

        let snapshot = snapshot_of(UiNode::new().with_child(UiNode::new().with_view_id(SURFACE)));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Idle);
        assert!(session.buttons_hidden);
        assert_eq!(engine.driver.tap_count(), 0);
    }

    #[tokio::test]
    async fn should_not_change_phase_when_idle_and_control_shows_play() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());

        let snapshot = snapshot_of(player_tree("Play video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Idle);
        assert!(!session.buttons_hidden);
        assert_eq!(engine.driver.tap_count(), 0);
    }

    #[tokio::test]
    async fn should_tap_surface_before_processing_when_buttons_hidden() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());
        session.buttons_hidden = true;

        let snapshot = snapshot_of(player_tree("Pause video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert!(!session.buttons_hidden);
        assert_eq!(
            engine.driver.tapped_ids(),
            vec![SURFACE.to_string(), PLAY_PAUSE.to_string()]
        );
    }

    #[tokio::test]
    async fn should_clear_buttons_hidden_even_when_surface_missing() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());
        session.buttons_hidden = true;

        let root = UiNode::new().with_child(
            UiNode::new()
                .with_view_id(PLAY_PAUSE)
                .with_description("Pause video"),
        );
        engine
            .handle_snapshot(&mut session, &snapshot_of(root))
            .await
            .unwrap();

        assert!(!session.buttons_hidden);
        assert_eq!(session.phase, Phase::SleepingBefore);
    }

    // ── SleepingBefore ─────────────────────────────────────────────

    #[tokio::test]
    async fn should_schedule_delayed_play_once() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let durations = Durations {
            before_play: 3,
            play: 5,
            after_play: 5,
        };
        let mut session = session_in(Phase::SleepingBefore, durations);

        let snapshot = snapshot_of(player_tree("Play video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert!(session.waiting_to_play);
        assert_eq!(session.phase, Phase::SleepingBefore);

        let scheduled = engine.scheduler.take();
        assert_eq!(scheduled.len(), 1);
        let (delay, command) = &scheduled[0];
        assert_eq!(*delay, Duration::from_secs(3));
        assert_eq!(command.epoch, session.epoch());
        assert!(matches!(command.action, TimerAction::PressPlay { .. }));
    }

    #[tokio::test]
    async fn should_not_schedule_again_while_waiting_to_play() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingBefore, Durations::default());

        let snapshot = snapshot_of(player_tree("Play video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(engine.scheduler.count(), 1);
    }

    #[tokio::test]
    async fn should_capture_snapshot_root_in_scheduled_command() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingBefore, Durations::default());

        let root = player_tree("Play video", None);
        let snapshot = snapshot_of(root.clone());
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        let scheduled = engine.scheduler.take();
        match &scheduled[0].1.action {
            TimerAction::PressPlay { root: captured } => assert_eq!(captured, &root),
            TimerAction::Relaunch => panic!("expected press_play"),
        }
    }

    // ── PressPlay timer ────────────────────────────────────────────

    #[tokio::test]
    async fn should_enter_playing_when_delayed_play_fires() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingBefore, Durations::default());
        session.waiting_to_play = true;

        let command = TimerCommand::press_play(session.epoch(), player_tree("Play video", None));
        engine.handle_timer(&mut session, command).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.started_at, Some(now));
        assert!(!session.waiting_to_play);
        assert_eq!(engine.driver.tapped_ids(), vec![PLAY_PAUSE.to_string()]);
    }

    #[tokio::test]
    async fn should_not_tap_when_delayed_play_finds_pause_label() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingBefore, Durations::default());
        session.waiting_to_play = true;

        let command = TimerCommand::press_play(session.epoch(), player_tree("Pause video", None));
        engine.handle_timer(&mut session, command).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(engine.driver.tap_count(), 0);
    }

    #[tokio::test]
    async fn should_still_enter_playing_when_play_control_missing() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingBefore, Durations::default());
        session.waiting_to_play = true;

        let command = TimerCommand::press_play(session.epoch(), UiNode::new());
        engine.handle_timer(&mut session, command).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert!(session.buttons_hidden);
        assert!(!session.waiting_to_play);
    }

    #[tokio::test]
    async fn should_drop_timer_from_earlier_cycle() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingBefore, Durations::default());
        let old_epoch = session.epoch();

        session.finish_cycle();
        session.begin_cycle();

        let command = TimerCommand::press_play(old_epoch, player_tree("Play video", None));
        engine.handle_timer(&mut session, command).await.unwrap();

        assert_eq!(session.phase, Phase::Idle);
        assert!(session.started_at.is_none());
        assert_eq!(engine.driver.tap_count(), 0);
    }

    // ── Playing ────────────────────────────────────────────────────

    #[tokio::test]
    async fn should_pause_and_schedule_relaunch_when_play_time_reached() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let durations = Durations {
            before_play: 3,
            play: 60,
            after_play: 7,
        };
        let mut session = session_in(Phase::Playing, durations);
        session.started_at = Some(seconds_ago(now, 5));

        let snapshot = snapshot_of(player_tree("Pause video", Some("1 minute 5 seconds")));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::SleepingAfter);
        assert_eq!(engine.driver.tapped_ids(), vec![PLAY_PAUSE.to_string()]);

        let scheduled = engine.scheduler.take();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].0, Duration::from_secs(7));
        assert_eq!(scheduled[0].1.action, TimerAction::Relaunch);
        assert_eq!(scheduled[0].1.epoch, session.epoch());
    }

    #[tokio::test]
    async fn should_not_pause_when_elapsed_below_play_duration() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let durations = Durations {
            before_play: 3,
            play: 60,
            after_play: 5,
        };
        let mut session = session_in(Phase::Playing, durations);
        session.started_at = Some(seconds_ago(now, 10));

        let snapshot = snapshot_of(player_tree("Pause video", Some("45 seconds")));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(engine.driver.tap_count(), 0);
        assert_eq!(engine.scheduler.count(), 0);
    }

    #[tokio::test]
    async fn should_not_pause_before_minimum_playing_time() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let durations = Durations {
            before_play: 3,
            play: 5,
            after_play: 5,
        };
        let mut session = session_in(Phase::Playing, durations);
        session.started_at = Some(seconds_ago(now, 1));

        let snapshot = snapshot_of(player_tree("Pause video", Some("45 seconds")));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(engine.driver.tap_count(), 0);
    }

    #[tokio::test]
    async fn should_set_buttons_hidden_when_elapsed_counter_missing() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Playing, Durations::default());
        session.started_at = Some(seconds_ago(now, 10));

        let snapshot = snapshot_of(player_tree("Pause video", None));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert!(session.buttons_hidden);
    }

    #[tokio::test]
    async fn should_ignore_unparseable_elapsed_text() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Playing, Durations::default());
        session.started_at = Some(seconds_ago(now, 10));

        let snapshot = snapshot_of(player_tree("Pause video", Some("loading")));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(engine.driver.tap_count(), 0);
        assert!(!session.buttons_hidden);
    }

    #[tokio::test]
    async fn should_set_buttons_hidden_when_pause_control_missing_at_threshold() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let durations = Durations {
            before_play: 3,
            play: 5,
            after_play: 5,
        };
        let mut session = session_in(Phase::Playing, durations);
        session.started_at = Some(seconds_ago(now, 10));

        let root = UiNode::new()
            .with_child(UiNode::new().with_view_id(SURFACE))
            .with_child(UiNode::new().with_description("45 seconds elapsed"));
        engine
            .handle_snapshot(&mut session, &snapshot_of(root))
            .await
            .unwrap();

        assert_eq!(session.phase, Phase::Playing);
        assert!(session.buttons_hidden);
        assert_eq!(engine.scheduler.count(), 0);
    }

    // ── Paused and rest phases ─────────────────────────────────────

    #[tokio::test]
    async fn should_skip_processing_when_paused() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Paused, Durations::default());

        let snapshot = snapshot_of(player_tree("Pause video", Some("45 seconds")));
        engine.handle_snapshot(&mut session, &snapshot).await.unwrap();

        assert_eq!(session.phase, Phase::Paused);
        assert_eq!(engine.driver.tap_count(), 0);
        assert_eq!(engine.scheduler.count(), 0);
    }

    #[tokio::test]
    async fn should_do_nothing_when_sleeping_after_or_not_running() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let snapshot = snapshot_of(player_tree("Pause video", Some("45 seconds")));

        for phase in [Phase::SleepingAfter, Phase::NotRunning] {
            let mut session = session_in(phase, Durations::default());
            engine.handle_snapshot(&mut session, &snapshot).await.unwrap();
            assert_eq!(session.phase, phase);
        }
        assert_eq!(engine.driver.tap_count(), 0);
    }

    // ── Relaunch timer ─────────────────────────────────────────────

    #[tokio::test]
    async fn should_launch_controller_and_finish_cycle_when_relaunch_fires() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::SleepingAfter, Durations::default());
        let epoch = session.epoch();

        engine
            .handle_timer(&mut session, TimerCommand::relaunch(epoch))
            .await
            .unwrap();

        assert_eq!(session.phase, Phase::NotRunning);
        assert_eq!(engine.driver.launch_count(), 1);
        assert!(session.is_stale(epoch));
    }

    #[tokio::test]
    async fn should_drop_stale_relaunch_without_launching() {
        let now = playloop_domain::time::now();
        let engine = make_engine(now);
        let mut session = session_in(Phase::Idle, Durations::default());
        let old_epoch = session.epoch();
        session.finish_cycle();
        session.begin_cycle();

        engine
            .handle_timer(&mut session, TimerCommand::relaunch(old_epoch))
            .await
            .unwrap();

        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(engine.driver.launch_count(), 0);
    }
}
