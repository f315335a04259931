use crate::pages::{LoginScreen, SessionScreen, WorkoutScreen};
use gymfreak_core::{Athlete, Workout};
use yew::prelude::*;

/// Screen identity: a closed set of mutually exclusive modes
#[derive(Debug, Clone, PartialEq)]
enum AppState {
    Login,
    SelectingWorkout { athlete: Athlete },
    InSession { athlete: Athlete, workout: Workout },
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Login);

    let on_login = {
        let state = state.clone();
        Callback::from(move |athlete: Athlete| {
            tracing::info!("Athlete signed in: {}", athlete.name());
            state.set(AppState::SelectingWorkout { athlete });
        })
    };

    // Logout clears the identity along with everything else
    let on_logout = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            tracing::info!("Logging out");
            state.set(AppState::Login);
        })
    };

    html! {
        <div class="gymfreak-app">
            {match &*state {
                AppState::Login => html! {
                    <LoginScreen on_login={on_login} />
                },

                AppState::SelectingWorkout { athlete } => {
                    let on_select = {
                        let state = state.clone();
                        let athlete = athlete.clone();
                        Callback::from(move |workout: Workout| {
                            tracing::info!("Selected workout: {}", workout.id);
                            state.set(AppState::InSession {
                                athlete: athlete.clone(),
                                workout,
                            });
                        })
                    };
                    html! {
                        <WorkoutScreen
                            athlete={athlete.clone()}
                            on_select={on_select}
                            on_logout={on_logout.clone()}
                        />
                    }
                }

                AppState::InSession { athlete, workout } => {
                    // Leaving the session discards its state unconditionally
                    let on_back = {
                        let state = state.clone();
                        let athlete = athlete.clone();
                        Callback::from(move |_: ()| {
                            state.set(AppState::SelectingWorkout {
                                athlete: athlete.clone(),
                            });
                        })
                    };
                    html! {
                        <SessionScreen
                            athlete={athlete.clone()}
                            workout={workout.clone()}
                            on_back={on_back}
                        />
                    }
                }
            }}
        </div>
    }
}
