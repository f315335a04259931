use gloo::timers::callback::Timeout;
use gymfreak_core::Athlete;
use yew::prelude::*;

/// Simulated-loading delay between a valid submit and the transition
const LOGIN_DELAY_MS: u32 = 600;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<Athlete>,
}

/// Identity capture: a single name field with a disabled-submit affordance
///
/// Whitespace-only input never triggers a transition; a valid name is passed
/// upward verbatim after a short fixed delay.
#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let name = use_state(String::new);
    let loading = use_state(|| false);

    let can_submit = !name.trim().is_empty() && !*loading;

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let loading = loading.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Ok(athlete) = Athlete::new((*name).clone()) {
                loading.set(true);
                let on_login = on_login.clone();
                Timeout::new(LOGIN_DELAY_MS, move || {
                    on_login.emit(athlete);
                })
                .forget();
            }
        })
    };

    html! {
        <div class="gymfreak-login">
            <div class="gymfreak-login__branding">
                <h1 class="gymfreak-login__title">{"GYM FREAK"}</h1>
                <p class="gymfreak-login__tagline">{"POWERED BY AI"}</p>
            </div>

            <form class="gymfreak-login__form" {onsubmit}>
                <label class="gymfreak-login__label">
                    {"ATHLETE NAME"}
                    <input
                        class="gymfreak-login__input"
                        type="text"
                        placeholder="Enter your name"
                        value={(*name).clone()}
                        {oninput}
                    />
                </label>
                <button
                    class="gymfreak-login__button"
                    type="submit"
                    disabled={!can_submit}
                >
                    {if *loading { "LOADING..." } else { "ENTER THE ARENA" }}
                </button>
            </form>

            <div class="gymfreak-login__footer">
                <p>{"NO PAIN. NO GAIN."}</p>
                <p class="gymfreak-login__features">
                    {"Real-time posture detection • AI rep counting • Form correction"}
                </p>
            </div>
        </div>
    }
}
