use crate::components::WorkoutCard;
use gymfreak_core::{Athlete, Difficulty, DifficultyFilter, Workout, WorkoutCatalog};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WorkoutScreenProps {
    pub athlete: Athlete,
    pub on_select: Callback<Workout>,
    pub on_logout: Callback<()>,
}

const FILTERS: [DifficultyFilter; 4] = [
    DifficultyFilter::All,
    DifficultyFilter::Only(Difficulty::Beginner),
    DifficultyFilter::Only(Difficulty::Intermediate),
    DifficultyFilter::Only(Difficulty::Advanced),
];

/// Activity catalog: the fixed workout list with tier filtering
#[function_component(WorkoutScreen)]
pub fn workout_screen(props: &WorkoutScreenProps) -> Html {
    let catalog = use_memo((), |_| WorkoutCatalog::default());
    let filter = use_state(DifficultyFilter::default);

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="gymfreak-selection">
            <header class="gymfreak-selection__header">
                <div>
                    <h1 class="gymfreak-selection__title">{"GYM FREAK AI"}</h1>
                    <p class="gymfreak-selection__welcome">
                        {format!("Welcome, {}", props.athlete.name())}
                    </p>
                </div>
                <button class="gymfreak-selection__logout" onclick={on_logout}>
                    {"Logout"}
                </button>
            </header>

            <main class="gymfreak-selection__content">
                <h2 class="gymfreak-selection__headline">{"CHOOSE YOUR WEAPON"}</h2>
                <p class="gymfreak-selection__subline">
                    {"Select a home workout and let AI perfect your form"}
                </p>

                <div class="gymfreak-selection__filters">
                    {for FILTERS.iter().map(|candidate| {
                        let candidate = *candidate;
                        let filter = filter.clone();
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(candidate))
                        };
                        html! {
                            <button
                                class={classes!(
                                    "gymfreak-selection__filter",
                                    (*filter == candidate).then_some("active")
                                )}
                                {onclick}
                            >
                                {candidate.to_string()}
                            </button>
                        }
                    })}
                </div>

                <div class="gymfreak-selection__grid">
                    {for catalog.filtered(*filter).into_iter().map(|workout| html! {
                        <WorkoutCard
                            workout={workout.clone()}
                            on_select={props.on_select.clone()}
                        />
                    })}
                </div>
            </main>
        </div>
    }
}
