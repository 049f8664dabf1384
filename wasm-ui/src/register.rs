//! Registration and login forms.

use agenda_rs::{PasswordField, confirmation_error, is_strong, is_valid_email};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::PasswordInput;

/// Reason the registration form may not be sent yet.
pub fn registration_error(email: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if !is_valid_email(email) {
        Some("Email inválido")
    } else if !is_strong(password) {
        Some("Senha fraca")
    } else {
        confirmation_error(password, confirm)
    }
}

#[derive(Properties, PartialEq)]
struct EmailInputProps {
    value: String,
    on_change: Callback<String>,
}

#[function_component(EmailInput)]
fn email_input(props: &EmailInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for="email">{ "Email" }</label>
            <input type="email" id="email" name="email" required=true value={props.value.clone()} {oninput} />
        </div>
    }
}

/// Field update callbacks for a password input.
fn field_callbacks(field: &UseStateHandle<PasswordField>) -> (Callback<String>, Callback<()>) {
    let on_change = {
        let field = field.clone();
        Callback::from(move |value: String| {
            let mut next = (*field).clone();
            next.set_value(value);
            field.set(next);
        })
    };
    let on_toggle = {
        let field = field.clone();
        Callback::from(move |_| {
            let mut next = (*field).clone();
            next.toggle_visibility();
            field.set(next);
        })
    };
    (on_change, on_toggle)
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(PasswordField::default);
    let confirm = use_state(PasswordField::default);
    let error = use_state(|| None::<&'static str>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let (on_password, on_password_toggle) = field_callbacks(&password);
    let (on_confirm, on_confirm_toggle) = field_callbacks(&confirm);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            let problem = registration_error(&email, password.value(), confirm.value());
            if problem.is_some() {
                e.prevent_default();
            }
            error.set(problem);
        })
    };

    let validity = confirmation_error(password.value(), confirm.value()).unwrap_or_default();

    html! {
        <form class="auth-form" method="post" action="/registro" onsubmit={on_submit}>
            <h2>{ "Cadastro" }</h2>
            if let Some(message) = *error {
                <div class="flash erro">{ message }</div>
            }
            <EmailInput value={(*email).clone()} on_change={on_email} />
            <PasswordInput
                id="senha"
                name="senha"
                label="Senha"
                field={(*password).clone()}
                on_change={on_password}
                on_toggle={on_password_toggle}
                show_feedback=true
            />
            <PasswordInput
                id="confirmar"
                name="confirmar"
                label="Confirmar senha"
                field={(*confirm).clone()}
                on_change={on_confirm}
                on_toggle={on_confirm_toggle}
                validity={validity}
            />
            <button type="submit" class="submit-button">{ "Cadastrar" }</button>
        </form>
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(PasswordField::default);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let (on_password, on_password_toggle) = field_callbacks(&password);

    html! {
        <form class="auth-form" method="post" action="/login">
            <h2>{ "Entrar" }</h2>
            <EmailInput value={(*email).clone()} on_change={on_email} />
            <PasswordInput
                id="senha-login"
                name="senha"
                label="Senha"
                field={(*password).clone()}
                on_change={on_password}
                on_toggle={on_password_toggle}
            />
            <button type="submit" class="submit-button">{ "Entrar" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_checks_in_order() {
        assert_eq!(registration_error("ana", "Abcde", "Abcde"), Some("Email inválido"));
        assert_eq!(registration_error("ana@x.com", "abcde", "abcde"), Some("Senha fraca"));
        assert_eq!(
            registration_error("ana@x.com", "Abcde", "Abcdf"),
            Some("As senhas não conferem")
        );
        assert_eq!(registration_error("ana@x.com", "Abcde", "Abcde"), None);
    }
}
