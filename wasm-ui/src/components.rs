//! UI Components for the booking page.

use agenda_rs::{PasswordField, Price, ServiceCard, Slot, SlotBoard, SlotState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Inline style of a slot button; occupied ones are greyed out.
pub fn slot_style(slot: &Slot) -> Option<&'static str> {
    match slot.state {
        SlotState::Occupied => Some("background-color: grey; cursor: not-allowed"),
        SlotState::Free => None,
    }
}

/// Inline style of an eye toggle.
pub fn toggle_style(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

/// Service cards with the running total.
#[derive(Properties, PartialEq)]
pub struct ServiceCardsProps {
    pub cards: Vec<ServiceCard>,
    pub total: Price,
    pub on_toggle: Callback<(String, bool)>,
}

#[function_component(ServiceCards)]
pub fn service_cards(props: &ServiceCardsProps) -> Html {
    html! {
        <section class="panel services-panel">
            <div class="panel-header">
                <h2>{ "Serviços" }</h2>
            </div>
            <div class="panel-content service-grid">
                { for props.cards.iter().map(|card| {
                    let id = card.service.id.clone();
                    let on_toggle = props.on_toggle.clone();
                    let onchange = Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_toggle.emit((id.clone(), input.checked()));
                    });
                    html! {
                        <label
                            class={classes!("service-card", card.checked.then_some("active"))}
                            data-price={card.service.price.to_string()}
                        >
                            <input
                                type="checkbox"
                                name="servicos"
                                value={card.service.id.clone()}
                                checked={card.checked}
                                {onchange}
                            />
                            <span class="service-name">{ &card.service.name }</span>
                            <span class="service-price">{ format!("R$ {}", card.service.price) }</span>
                        </label>
                    }
                })}
            </div>
            <div class="total">
                { "Total: R$ " }
                <span id="totalValue">{ props.total.to_string() }</span>
                <input type="hidden" id="totalInput" name="total" value={props.total.to_string()} />
            </div>
        </section>
    }
}

/// Date input and the closed-day message.
#[derive(Properties, PartialEq)]
pub struct DatePanelProps {
    pub value: String,
    pub message: String,
    pub on_change: Callback<String>,
}

#[function_component(DatePanel)]
pub fn date_panel(props: &DatePanelProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for="data">{ "Data" }</label>
            <input type="date" id="data" name="data" value={props.value.clone()} {onchange} />
            <p id="msgData" class="msg-data">{ &props.message }</p>
        </div>
    }
}

/// Slot buttons for the chosen date.
#[derive(Properties, PartialEq)]
pub struct SlotPickerProps {
    pub board: SlotBoard,
    pub loading: bool,
    pub on_select: Callback<String>,
}

#[function_component(SlotPicker)]
pub fn slot_picker(props: &SlotPickerProps) -> Html {
    html! {
        <div class="field">
            <div id="horarios" class="horarios">
                if props.loading {
                    <span class="hint">{ "Carregando horários..." }</span>
                }
                { for props.board.slots().iter().map(|slot| {
                    let onclick = if slot.is_selectable() {
                        let time = slot.time.clone();
                        props.on_select.reform(move |_: MouseEvent| time.clone())
                    } else {
                        Callback::noop()
                    };
                    html! {
                        <div class={slot.css_class()} style={slot_style(slot)} {onclick}>
                            { &slot.time }
                        </div>
                    }
                })}
            </div>
            <input
                type="hidden"
                id="horarioSelecionado"
                name="horario"
                value={props.board.selected().unwrap_or_default().to_string()}
            />
        </div>
    }
}

/// Phone input with the `(DD) DDDDD-DDDD` mask.
#[derive(Properties, PartialEq)]
pub struct PhoneInputProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(PhoneInput)]
pub fn phone_input(props: &PhoneInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for="telefone">{ "Telefone" }</label>
            <input
                type="tel"
                id="telefone"
                name="telefone"
                placeholder="(00) 00000-0000"
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

/// Password input with an eye toggle and optional strength message.
#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub id: AttrValue,
    pub name: AttrValue,
    pub label: AttrValue,
    pub field: PasswordField,
    pub on_change: Callback<String>,
    pub on_toggle: Callback<()>,
    #[prop_or(false)]
    pub show_feedback: bool,
    /// Custom validity message; empty means valid.
    #[prop_or_default]
    pub validity: AttrValue,
}

#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let input_ref = use_node_ref();

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_toggle_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    {
        let input_ref = input_ref.clone();
        use_effect_with(props.validity.clone(), move |validity| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_custom_validity(validity);
            }
        });
    }

    let feedback = props.field.feedback();
    let visibility = props.field.visibility();

    html! {
        <div class="field password-field">
            <label for={props.id.clone()}>{ &props.label }</label>
            <div class="password-wrapper">
                <input
                    ref={input_ref}
                    type={visibility.input_type()}
                    id={props.id.clone()}
                    name={props.name.clone()}
                    value={props.field.value().to_string()}
                    required=true
                    {oninput}
                />
                <span
                    class={classes!("toggle-senha", visibility.is_shown().then_some("ativo"))}
                    style={toggle_style(props.field.toggle_visible())}
                    onclick={on_toggle_click}
                >
                    { "\u{1F441}" }
                </span>
            </div>
            if props.show_feedback {
                <p class={feedback.css_class()}>{ feedback.message() }</p>
            }
        </div>
    }
}
