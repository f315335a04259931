use yew::prelude::*;

/// Render elapsed seconds as `mm:ss`
pub fn format_duration(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[derive(Properties, PartialEq)]
pub struct LiveStatsProps {
    pub reps: u32,
    pub target: u32,
    pub duration_secs: u32,
    pub form_accuracy: f64,
}

/// Live metrics panel shown next to the camera feed
#[function_component(LiveStats)]
pub fn live_stats(props: &LiveStatsProps) -> Html {
    let accuracy = props.form_accuracy;

    html! {
        <div class="gymfreak-live-stats">
            <h3 class="gymfreak-live-stats__title">{"LIVE STATS"}</h3>

            <div class="gymfreak-live-stats__metric">
                <p class="gymfreak-live-stats__label">{"REPS COUNTED"}</p>
                <p class="gymfreak-live-stats__value">{props.reps}</p>
                <p class="gymfreak-live-stats__hint">{format!("Target: {}", props.target)}</p>
            </div>

            <div class="gymfreak-live-stats__metric">
                <p class="gymfreak-live-stats__label">{"DURATION"}</p>
                <p class="gymfreak-live-stats__value">{format_duration(props.duration_secs)}</p>
            </div>

            <div class="gymfreak-live-stats__metric">
                <p class="gymfreak-live-stats__label">
                    {"FORM ACCURACY "}
                    <span class="gymfreak-live-stats__percent">
                        {format!("{}%", accuracy.round() as u32)}
                    </span>
                </p>
                <div class="gymfreak-live-stats__bar">
                    <div
                        class="gymfreak-live-stats__bar-fill"
                        style={format!("width: {accuracy}%")}
                    ></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds_zero_padded() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(9), "00:09");
        assert_eq!(format_duration(62), "01:02");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn minutes_keep_counting_past_an_hour() {
        assert_eq!(format_duration(3_661), "61:01");
    }

    #[test]
    fn test_live_stats_props() {
        let props = yew::props!(LiveStatsProps {
            reps: 5,
            target: 20,
            duration_secs: 30,
            form_accuracy: 92.5,
        });
        assert_eq!(props.reps, 5);
        assert_eq!(props.target, 20);
    }
}
