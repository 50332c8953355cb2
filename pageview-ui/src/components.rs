#![cfg(target_arch = "wasm32")]

//! Component Yew cho biểu đồ cột và dropdown, dùng chung logic với trang tĩnh.

use std::rc::Rc;

use pageview_core::{BarChart, ChartBar, ClickTarget, Dropdown, DropdownOption, DropdownSet, UiConfig};
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew::TargetCast;

use crate::dom::{self, Listener};
use crate::styles;
use crate::tooltip::TooltipController;

#[hook]
fn use_default_styles() {
    use_effect_with((), |_| {
        if let Err(err) = dom::document().and_then(|document| styles::ensure_styles(&document)) {
            dom::report("Không chèn được CSS mặc định", &err);
        }
        || ()
    });
}

#[derive(Properties, PartialEq)]
pub struct BarChartViewProps {
    pub chart: BarChart,
    #[prop_or_default]
    pub config: UiConfig,
}

#[function_component(BarChartView)]
pub fn bar_chart_view(props: &BarChartViewProps) -> Html {
    use_default_styles();

    let tooltip_ref = use_node_ref();
    let label_ref = use_node_ref();
    let value_ref = use_node_ref();
    let controller = use_mut_ref(|| None::<TooltipController>);

    {
        let controller = controller.clone();
        let tooltip_ref = tooltip_ref.clone();
        let label_ref = label_ref.clone();
        let value_ref = value_ref.clone();
        use_effect_with(props.config.clone(), move |config| {
            *controller.borrow_mut() = tooltip_ref.cast::<HtmlElement>().map(|root| {
                TooltipController::new(
                    root,
                    label_ref.cast::<Element>(),
                    value_ref.cast::<Element>(),
                    config,
                )
            });
            || ()
        });
    }

    let on_move = {
        let controller = controller.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(bar) = event.target_dyn_into::<Element>() else {
                return;
            };
            if let Some(controller) = controller.borrow().as_ref() {
                if let Err(err) = controller.hover(&bar) {
                    dom::report("Không hiển thị được tooltip", &err);
                }
            }
        })
    };

    let on_leave = Callback::from(move |_: MouseEvent| {
        if let Some(controller) = controller.borrow().as_ref() {
            if let Err(err) = controller.hide() {
                dom::report("Không ẩn được tooltip", &err);
            }
        }
    });

    let chart = &props.chart;
    html! {
        <div class="pageview-chart">
            <svg
                class="bar-chart"
                viewBox={format!("0 0 {} {}", chart.width, chart.height)}
                preserveAspectRatio="none"
            >
                { for chart.bars.iter().map(|bar| render_bar(bar, &on_move, &on_leave)) }
            </svg>
            <div class="tooltip" ref={tooltip_ref} style="display: none;">
                <span class="label" ref={label_ref}></span>
                <span class="value" ref={value_ref}></span>
            </div>
        </div>
    }
}

fn render_bar(bar: &ChartBar, on_move: &Callback<MouseEvent>, on_leave: &Callback<MouseEvent>) -> Html {
    let baseline = bar.max_height;
    html! {
        <g>
            <rect
                class="bar-track"
                x={bar.x.to_string()}
                y={bar.top_offset.to_string()}
                width={bar.width.to_string()}
                height={(baseline - bar.top_offset).to_string()}
            />
            <rect
                class="bar"
                x={bar.x.to_string()}
                y={bar.y.to_string()}
                width={bar.width.to_string()}
                height={(baseline - bar.y).max(0.0).to_string()}
                data-label={bar.label.clone()}
                data-value={bar.value.to_string()}
                onmousemove={on_move.clone()}
                onmouseleave={on_leave.clone()}
            />
        </g>
    }
}

#[derive(Clone, PartialEq)]
struct DropdownState(DropdownSet);

impl Reducible for DropdownState {
    type Action = ClickTarget;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.handle_click(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownViewProps {
    pub dropdown: Dropdown,
    #[prop_or_default]
    pub config: UiConfig,
}

#[function_component(DropdownView)]
pub fn dropdown_view(props: &DropdownViewProps) -> Html {
    use_default_styles();

    let state = use_reducer(|| DropdownState(DropdownSet::new(1)));
    let container_ref = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        let container_ref = container_ref.clone();
        use_effect_with((), move |_| {
            let on_click = move |event: Event| {
                let inside = match (container_ref.cast::<Element>(), dom::event_element(&event)) {
                    (Some(container), Some(target)) => dom::is_inside(&container, &target),
                    _ => false,
                };
                dispatcher.dispatch(if inside {
                    ClickTarget::InsideContainer
                } else {
                    ClickTarget::Outside
                });
            };
            let listener =
                dom::document().and_then(|document| Listener::new(&document, "click", on_click));
            if let Err(err) = &listener {
                dom::report("Không gắn được listener cho document", err);
            }
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            dispatcher.dispatch(ClickTarget::Trigger(0));
        })
    };

    let open = state.0.is_open(0);
    let dropdown = &props.dropdown;
    html! {
        <div
            class={classes!("dropdown-container", open.then(|| props.config.open_class.clone()))}
            ref={container_ref}
        >
            <button type="button" class="dropdown-button" onclick={on_toggle}>
                { dropdown.selected.name.clone() }
            </button>
            <ul class="dropdown-menu">
                { for dropdown.options.iter().map(|option| render_option(option, &dropdown.selected)) }
            </ul>
            if !dropdown.input_name.is_empty() {
                <input
                    type="hidden"
                    name={dropdown.input_name.clone()}
                    value={dropdown.selected.value.clone()}
                />
            }
        </div>
    }
}

fn render_option(option: &DropdownOption, selected: &DropdownOption) -> Html {
    let is_selected = option == selected;
    html! {
        <li>
            <a
                class={classes!("dropdown-option", is_selected.then_some("is-selected"))}
                href={option.link.clone()}
            >
                { option.name.clone() }
            </a>
        </li>
    }
}
