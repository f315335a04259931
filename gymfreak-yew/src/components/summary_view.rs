use crate::components::format_duration;
use gymfreak_core::SessionSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryViewProps {
    pub athlete_name: AttrValue,
    pub summary: SessionSummary,
    pub on_next: Callback<()>,
    pub on_back: Callback<()>,
}

/// End-of-session summary card with the frozen metrics
#[function_component(SummaryView)]
pub fn summary_view(props: &SummaryViewProps) -> Html {
    let summary = props.summary;

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="gymfreak-summary">
            <div class="gymfreak-summary__card">
                <h2 class="gymfreak-summary__title">{"WORKOUT COMPLETE!"}</h2>
                <p class="gymfreak-summary__greeting">
                    {format!("Great job, {}!", props.athlete_name)}
                </p>

                <div class="gymfreak-summary__metric">
                    <p class="gymfreak-summary__label">{"REPS COMPLETED"}</p>
                    <p class="gymfreak-summary__value">{summary.reps}</p>
                </div>

                <div class="gymfreak-summary__row">
                    <div class="gymfreak-summary__metric">
                        <p class="gymfreak-summary__label">{"DURATION"}</p>
                        <p class="gymfreak-summary__value">
                            {format_duration(summary.duration_secs)}
                        </p>
                    </div>
                    <div class="gymfreak-summary__metric">
                        <p class="gymfreak-summary__label">{"CALORIES"}</p>
                        <p class="gymfreak-summary__value">{summary.calories}</p>
                    </div>
                </div>

                <div class="gymfreak-summary__metric">
                    <p class="gymfreak-summary__label">{"FORM ACCURACY"}</p>
                    <div class="gymfreak-summary__bar">
                        <div
                            class="gymfreak-summary__bar-fill"
                            style={format!("width: {}%", summary.form_accuracy)}
                        >
                            {format!("{}%", summary.form_accuracy)}
                        </div>
                    </div>
                </div>

                <button class="gymfreak-summary__next" onclick={on_next}>
                    {"NEXT EXERCISE"}
                </button>
                <button class="gymfreak-summary__back" onclick={on_back}>
                    {"BACK TO MENU"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_props() {
        let props = yew::props!(SummaryViewProps {
            athlete_name: AttrValue::from("Maria"),
            summary: SessionSummary {
                reps: 20,
                duration_secs: 120,
                calories: 62,
                form_accuracy: 91,
            },
            on_next: Callback::from(|_: ()| {}),
            on_back: Callback::from(|_: ()| {}),
        });

        assert_eq!(props.summary.calories, 62);
        assert_eq!(props.athlete_name, "Maria");
    }
}
