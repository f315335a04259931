use gymfreak_core::{Difficulty, Workout};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WorkoutCardProps {
    pub workout: Workout,
    pub on_select: Callback<Workout>,
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "gymfreak-workout-card__badge--beginner",
        Difficulty::Intermediate => "gymfreak-workout-card__badge--intermediate",
        Difficulty::Advanced => "gymfreak-workout-card__badge--advanced",
    }
}

/// One catalog entry as a selectable card
#[function_component(WorkoutCard)]
pub fn workout_card(props: &WorkoutCardProps) -> Html {
    let workout = &props.workout;

    let onclick = {
        let workout = workout.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            on_select.emit(workout.clone());
        })
    };

    html! {
        <div class="gymfreak-workout-card" {onclick}>
            <div class="gymfreak-workout-card__header">
                <span class="gymfreak-workout-card__icon">{&workout.icon}</span>
                <span class={classes!(
                    "gymfreak-workout-card__badge",
                    difficulty_class(workout.difficulty)
                )}>
                    {workout.difficulty.to_string()}
                </span>
            </div>

            <h3 class="gymfreak-workout-card__name">{&workout.name}</h3>
            <p class="gymfreak-workout-card__description">{&workout.description}</p>

            <div class="gymfreak-workout-card__footer">
                <span class="gymfreak-workout-card__target">
                    {format!("Target: {}", workout.target_label())}
                </span>
                <button class="gymfreak-workout-card__play">{"▶"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymfreak_core::WorkoutCatalog;

    #[test]
    fn test_card_props() {
        let catalog = WorkoutCatalog::default();
        let workout = catalog.get("squats").unwrap().clone();
        let on_select = Callback::from(|_: Workout| {});

        let props = yew::props!(WorkoutCardProps { workout, on_select });
        assert_eq!(props.workout.name, "Squats");
    }

    #[test]
    fn test_badge_class_per_tier() {
        assert!(difficulty_class(Difficulty::Beginner).ends_with("beginner"));
        assert!(difficulty_class(Difficulty::Intermediate).ends_with("intermediate"));
        assert!(difficulty_class(Difficulty::Advanced).ends_with("advanced"));
    }
}
