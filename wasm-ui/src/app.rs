//! Main application component.

use agenda_rs::{
    AgendaConfig, BookingForm, DateOutcome, MenuState, RequestGeneration, SlotBoard, SlotUpdate,
    apply_response, date_outcome, mask_phone,
};
use gloo::console;
use gloo::dialogs::alert;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::fetch_occupied;
use crate::components::{DatePanel, PhoneInput, ServiceCards, SlotPicker};
use crate::register::{LoginPage, RegisterPage};

/// Pages reachable from the navigation menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Booking,
    Login,
    Register,
}

impl Page {
    const ALL: [Page; 3] = [Page::Booking, Page::Login, Page::Register];

    fn title(self) -> &'static str {
        match self {
            Page::Booking => "Agendar",
            Page::Login => "Entrar",
            Page::Register => "Cadastrar",
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| Page::Booking);
    let menu = use_state(MenuState::default);

    let on_menu_toggle = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let on_overlay_click = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "Salão" }</h1>
                </div>
                <button id="menu-toggle" class="menu-toggle" onclick={on_menu_toggle}>
                    { "\u{2630}" }
                </button>
                <nav id="nav-menu" class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                    { for Page::ALL.iter().map(|p| {
                        let target = *p;
                        let current = *page == target;
                        let page = page.clone();
                        let menu = menu.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            page.set(target);
                            let mut next = *menu;
                            next.close();
                            menu.set(next);
                        });
                        html! {
                            <a class={classes!("nav-link", current.then_some("current"))} {onclick}>
                                { target.title() }
                            </a>
                        }
                    })}
                </nav>
            </header>
            <div id="menu-overlay" class={classes!("menu-overlay", menu.is_open().then_some("active"))} onclick={on_overlay_click} />

            <main class="main">
                {
                    match *page {
                        Page::Booking => html! { <BookingPage /> },
                        Page::Login => html! { <LoginPage /> },
                        Page::Register => html! { <RegisterPage /> },
                    }
                }
            </main>
        </div>
    }
}

/// Booking form: services, date, slot and phone.
#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let config = use_memo((), |_| AgendaConfig::default());
    let selection = use_state(|| config.selection());
    let date = use_state(String::new);
    let day_message = use_state(String::new);
    let board = use_state(SlotBoard::default);
    let loading = use_state(|| false);
    let phone = use_state(String::new);
    let generation = use_mut_ref(RequestGeneration::default);

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |(id, checked): (String, bool)| {
            let mut next = (*selection).clone();
            if let Err(e) = next.toggle(&id, checked) {
                console::warn!(e.to_string());
                return;
            }
            selection.set(next);
        })
    };

    let on_date_change = {
        let config = config.clone();
        let date = date.clone();
        let day_message = day_message.clone();
        let board = board.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        Callback::from(move |value: String| {
            date.set(value.clone());
            board.set(SlotBoard::default());
            day_message.set(String::new());
            loading.set(false);
            // Any answer still in flight belongs to the previous date.
            let tag = generation.borrow_mut().next();

            let day = match date_outcome(&config.open_days, &value) {
                DateOutcome::Invalid(e) => {
                    console::warn!(e.to_string());
                    return;
                }
                DateOutcome::Closed(message) => {
                    day_message.set(message.to_string());
                    return;
                }
                DateOutcome::Fetch(day) => day,
            };

            loading.set(true);
            let config = config.clone();
            let day_message = day_message.clone();
            let board = board.clone();
            let loading = loading.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = fetch_occupied(&config.api_base, day).await;
                if let Err(e) = &result {
                    console::error!(e.clone());
                }
                let update = apply_response(&generation.borrow(), tag, &config.slots, result);
                match update {
                    None => console::log!(format!("dropping stale slot list for {day}")),
                    Some(SlotUpdate::Board(next)) => {
                        loading.set(false);
                        board.set(next);
                    }
                    Some(SlotUpdate::Failed(message)) => {
                        loading.set(false);
                        day_message.set(message.to_string());
                    }
                }
            });
        })
    };

    let on_slot_select = {
        let board = board.clone();
        Callback::from(move |time: String| {
            let mut next = (*board).clone();
            match next.select(&time) {
                Ok(()) => board.set(next),
                Err(e) => console::warn!(e.to_string()),
            }
        })
    };

    let on_phone_change = {
        let phone = phone.clone();
        Callback::from(move |text: String| phone.set(mask_phone(&text)))
    };

    let on_submit = {
        let selection = selection.clone();
        let date = date.clone();
        let board = board.clone();
        let phone = phone.clone();
        Callback::from(move |e: SubmitEvent| {
            let form = BookingForm::from_page(&selection, &date, board.selected(), &phone);
            if let Err(err) = form.validate() {
                e.prevent_default();
                alert(&err.to_string());
            }
        })
    };

    html! {
        <form class="booking-form" method="post" action="/agendamento" onsubmit={on_submit}>
            <ServiceCards
                cards={selection.cards().to_vec()}
                total={selection.total()}
                on_toggle={on_toggle}
            />

            <section class="panel schedule-panel">
                <div class="panel-header">
                    <h2>{ "Data e horário" }</h2>
                </div>
                <div class="panel-content">
                    <DatePanel
                        value={(*date).clone()}
                        message={(*day_message).clone()}
                        on_change={on_date_change}
                    />
                    <SlotPicker
                        board={(*board).clone()}
                        loading={*loading}
                        on_select={on_slot_select}
                    />
                    <PhoneInput value={(*phone).clone()} on_change={on_phone_change} />
                </div>
            </section>

            <button type="submit" class="submit-button">{ "Confirmar agendamento" }</button>
        </form>
    }
}
