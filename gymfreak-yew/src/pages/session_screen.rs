use crate::camera;
use crate::components::{LiveStats, SummaryView};
use crate::config::CameraConfig;
use crate::hooks::use_session_engine;
use gloo::timers::callback::Interval;
use gymfreak_core::{Athlete, SessionCommand, SessionPhase, Workout, MAX_REP_DECAY};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlVideoElement, MediaStream};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SessionScreenProps {
    pub athlete: Athlete,
    pub workout: Workout,
    pub on_back: Callback<()>,
}

/// Session runner: camera feed, one-second clock, manual rep counting
///
/// The camera stream is acquired once on mount and released on every exit
/// path — explicit finish, navigation away, or unmount. The stream travels
/// through a [`camera::StreamSlot`] so that leaving the screen while the
/// permission prompt is still open stops a late-arriving stream instead of
/// leaking it. Leaving the screen discards all session state.
#[function_component(SessionScreen)]
pub fn session_screen(props: &SessionScreenProps) -> Html {
    let engine = use_session_engine(props.workout.clone());
    let video_ref = use_node_ref();
    let slot = use_memo((), |_| camera::StreamSlot::<MediaStream>::new());

    // Acquire the camera on mount; denial is surfaced once with no retry.
    {
        let apply = engine.apply.clone();
        let video_ref = video_ref.clone();
        let slot = (*slot).clone();
        use_effect_with((), move |_| {
            let cleanup_slot = slot.clone();

            spawn_local(async move {
                match camera::acquire_stream(&CameraConfig::default()).await {
                    Ok(media) => {
                        let preview = media.clone();
                        match slot.store(media) {
                            // Granted after the screen was left: stop it now
                            Some(orphaned) => camera::release_stream(&orphaned),
                            None => {
                                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                                    camera::attach_stream(&video, &preview);
                                }
                                apply(SessionCommand::CameraReady);
                            }
                        }
                    }
                    Err(err) => {
                        tracing::error!("Camera access denied: {err}");
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(
                                "Please allow camera access to use form detection",
                            );
                        }
                    }
                }
            });

            move || {
                if let Some(media) = cleanup_slot.close() {
                    camera::release_stream(&media);
                }
            }
        });
    }

    // One-second clock, alive exactly while the session is active. Pausing
    // drops the interval; resuming creates a fresh one (no catch-up).
    {
        let apply = engine.apply.clone();
        let ticking = engine.snapshot.phase() == SessionPhase::Active;
        use_effect_with(ticking, move |running| {
            let interval =
                (*running).then(|| Interval::new(1_000, move || apply(SessionCommand::Tick)));
            move || drop(interval)
        });
    }

    let release_camera = {
        let slot = (*slot).clone();
        let video_ref = video_ref.clone();
        move || {
            if let Some(media) = slot.close() {
                camera::release_stream(&media);
            }
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                camera::detach_stream(&video);
            }
        }
    };

    let on_rep = {
        let apply = engine.apply.clone();
        Callback::from(move |_: MouseEvent| {
            let decay = js_sys::Math::random() * MAX_REP_DECAY;
            apply(SessionCommand::RecordRep { decay });
        })
    };

    let on_toggle_pause = {
        let apply = engine.apply.clone();
        Callback::from(move |_: MouseEvent| apply(SessionCommand::TogglePause))
    };

    let on_finish = {
        let apply = engine.apply.clone();
        let release_camera = release_camera.clone();
        Callback::from(move |_: MouseEvent| {
            apply(SessionCommand::Finish);
            release_camera();
        })
    };

    let on_leave = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    if let Some(summary) = engine.snapshot.summary() {
        let back_to_menu = {
            let on_back = props.on_back.clone();
            Callback::from(move |_: ()| on_back.emit(()))
        };
        return html! {
            <SummaryView
                athlete_name={props.athlete.name().to_string()}
                summary={*summary}
                on_next={back_to_menu.clone()}
                on_back={back_to_menu}
            />
        };
    }

    let phase = engine.snapshot.phase();
    let paused = phase == SessionPhase::Paused;

    html! {
        <div class="gymfreak-session">
            <header class="gymfreak-session__header">
                <div>
                    <h2 class="gymfreak-session__title">{&props.workout.name}</h2>
                    <p class="gymfreak-session__subtitle">
                        {"AI Form Detection & Rep Counting"}
                    </p>
                </div>
                <button class="gymfreak-session__close" onclick={on_leave.clone()}>
                    {"✕"}
                </button>
            </header>

            <div class="gymfreak-session__content">
                <div class="gymfreak-session__feed">
                    <video ref={video_ref.clone()} class="gymfreak-session__video" />
                    {if phase == SessionPhase::AcquiringCamera {
                        html! {
                            <p class="gymfreak-session__acquiring">
                                {"Waiting for camera..."}
                            </p>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="gymfreak-session__controls">
                        <button
                            class="gymfreak-session__pause"
                            onclick={on_toggle_pause}
                            disabled={phase == SessionPhase::AcquiringCamera}
                        >
                            {if paused { "RESUME" } else { "PAUSE" }}
                        </button>
                        <button
                            class="gymfreak-session__rep"
                            onclick={on_rep}
                            disabled={phase != SessionPhase::Active}
                        >
                            {"REP +"}
                        </button>
                    </div>
                </div>

                <aside class="gymfreak-session__sidebar">
                    <LiveStats
                        reps={engine.snapshot.reps()}
                        target={props.workout.target}
                        duration_secs={engine.snapshot.duration_secs()}
                        form_accuracy={engine.snapshot.form_accuracy()}
                    />

                    <button
                        class="gymfreak-session__finish"
                        onclick={on_finish}
                        disabled={phase == SessionPhase::AcquiringCamera}
                    >
                        {"FINISH WORKOUT"}
                    </button>
                    <button class="gymfreak-session__cancel" onclick={on_leave}>
                        {"CANCEL"}
                    </button>

                    <p class="gymfreak-session__tip">
                        {"Keep your camera steady for best results"}
                    </p>
                </aside>
            </div>
        </div>
    }
}
