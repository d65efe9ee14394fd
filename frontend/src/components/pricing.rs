use yew::prelude::*;

use crate::components::common::Pretitle;
use crate::components::icons;
use crate::content::{Plan, PLANS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn price(self, plan: &Plan) -> f64 {
        match self {
            BillingPeriod::Monthly => plan.monthly_price,
            BillingPeriod::Yearly => plan.yearly_price,
        }
    }

    fn unit(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "mês",
            BillingPeriod::Yearly => "ano",
        }
    }
}

/// Formats an amount the Brazilian way, `2790.9` becoming `2.790,90`.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{},{:02}", grouped, cents % 100)
}

/// Whole percent saved by paying yearly instead of twelve monthly payments.
pub fn yearly_savings_percent(monthly: f64, yearly: f64) -> i64 {
    let twelve_months = monthly * 12.0;
    if twelve_months <= 0.0 {
        return 0;
    }
    ((twelve_months - yearly) / twelve_months * 100.0).round() as i64
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: &'static Plan,
    period: BillingPeriod,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = props.plan;
    let period = props.period;

    html! {
        <div class={classes!("plan-card", plan.highlight.then(|| "highlight"))}>
            <span class="plan-badge">{plan.badge}</span>
            <div class="plan-head">
                <h3>{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
                <div class="plan-limits">
                    <div>{icons::info()}<span>{plan.employees}</span></div>
                    <div>{icons::info()}<span>{plan.logins}</span></div>
                </div>
                <div class="plan-price">
                    <span class="currency">{"R$"}</span>
                    <span class="amount">{format_brl(period.price(plan))}</span>
                </div>
                <p class="plan-unit">{format!("por {}", period.unit())}</p>
                if period == BillingPeriod::Yearly {
                    <p class="plan-savings">
                        {format!(
                            "Economize {}% no plano anual",
                            yearly_savings_percent(plan.monthly_price, plan.yearly_price)
                        )}
                    </p>
                }
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li><span class="plan-check">{icons::check()}</span><span>{*feature}</span></li>
                }) }
            </ul>
            <button class="plan-cta" type="button">
                <span>{if plan.highlight { "Começar Agora" } else { "Começar Teste" }}</span>
                <span class="plan-cta-icon">{icons::check()}</span>
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let period = use_state_eq(|| BillingPeriod::Monthly);

    let choose = |value: BillingPeriod| {
        let period = period.clone();
        Callback::from(move |_: MouseEvent| period.set(value))
    };

    html! {
        <section class="pricing section" id="option">
            <div class="container">
                <div class="section-head">
                    <Pretitle text="Planos e Preços" center={true} />
                    <h2>{"Escolha o Plano Ideal para Sua Empresa"}</h2>
                    <p>
                        {"Transparência total. Sem taxas ocultas. Cancele quando quiser. \
                        Comece com 14 dias grátis em qualquer plano."}
                    </p>
                    <div class="billing-toggle" role="group" aria-label="Período de cobrança">
                        <button
                            class={classes!("billing-option", (*period == BillingPeriod::Monthly).then(|| "selected"))}
                            aria-pressed={(*period == BillingPeriod::Monthly).to_string()}
                            onclick={choose(BillingPeriod::Monthly)}
                        >
                            {"Mensal"}
                        </button>
                        <button
                            class={classes!("billing-option", (*period == BillingPeriod::Yearly).then(|| "selected"))}
                            aria-pressed={(*period == BillingPeriod::Yearly).to_string()}
                            onclick={choose(BillingPeriod::Yearly)}
                        >
                            {"Anual"}
                            <span class="billing-discount">{"-17%"}</span>
                        </button>
                    </div>
                </div>

                <div class="plan-grid">
                    { for PLANS.iter().map(|plan| html! {
                        <PlanCard key={plan.name} {plan} period={*period} />
                    }) }
                </div>

                <div class="pricing-notes">
                    <p>{"Todos os planos incluem 14 dias de teste grátis. Não é necessário cartão de crédito."}</p>
                    <ul>
                        <li>{icons::check()}<span>{"Migração gratuita de dados"}</span></li>
                        <li>{icons::check()}<span>{"Cancelamento a qualquer momento"}</span></li>
                        <li>{icons::check()}<span>{"Suporte em português"}</span></li>
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .billing-toggle {
                    display: inline-flex;
                    background: #f3f4f6;
                    border-radius: 999px;
                    padding: 0.25rem;
                    gap: 0.25rem;
                }
                .billing-option {
                    position: relative;
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    border: none;
                    background: none;
                    font-weight: 600;
                    font-size: 0.875rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .billing-option.selected {
                    background: #ffc221;
                    color: #000;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
                }
                .billing-discount {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    background: #22c55e;
                    color: #fff;
                    font-size: 0.75rem;
                    padding: 0.125rem 0.5rem;
                    border-radius: 999px;
                }
                .plan-grid {
                    display: grid;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .plan-card {
                    position: relative;
                    border-radius: 8px;
                    padding: 2rem;
                    border: 2px solid #e5e7eb;
                    background: #fff;
                    transition: transform 0.3s;
                }
                .plan-card:hover {
                    transform: scale(1.05);
                }
                .plan-card.highlight {
                    background: #0f1a2a;
                    color: #fff;
                    border-color: #ffc221;
                }
                .plan-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #ffc221;
                    color: #000;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.375rem 1rem;
                    border-radius: 999px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    white-space: nowrap;
                }
                .plan-head {
                    text-align: center;
                    margin: 0.5rem 0 1.5rem;
                }
                .plan-limits div {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }
                .plan-limits .icon,
                .plan-check {
                    color: #ffc221;
                }
                .plan-price {
                    display: flex;
                    align-items: baseline;
                    justify-content: center;
                    gap: 0.25rem;
                    margin-top: 1rem;
                }
                .plan-price .amount {
                    font-size: 3rem;
                    font-weight: 900;
                }
                .plan-card.highlight .amount {
                    color: #ffc221;
                }
                .plan-unit {
                    font-size: 0.875rem;
                    margin: 0.25rem 0 0;
                }
                .plan-savings {
                    font-size: 0.75rem;
                    color: #22c55e;
                    font-weight: 600;
                }
                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }
                .plan-features li {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .plan-cta {
                    width: 100%;
                    height: 54px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 5px 0 0;
                    border: 2px solid #ffc221;
                    background: none;
                    color: inherit;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 1.2px;
                    cursor: pointer;
                }
                .plan-cta span:first-child {
                    flex: 1;
                }
                .plan-card.highlight .plan-cta {
                    background: #ffc221;
                    color: #000;
                }
                .plan-cta-icon {
                    width: 2.75rem;
                    height: 2.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffc221;
                }
                .plan-card.highlight .plan-cta-icon {
                    background: #fff;
                    color: #ffc221;
                }
                .pricing-notes {
                    margin-top: 4rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .pricing-notes ul {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    list-style: none;
                    padding: 0;
                }
                .pricing-notes li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                @media (min-width: 768px) {
                    .plan-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 1280px) {
                    .plan-grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazilian_formatting() {
        assert_eq!(format_brl(2790.90), "2.790,90");
        assert_eq!(format_brl(99.90), "99,90");
        assert_eq!(format_brl(999.99), "999,99");
        assert_eq!(format_brl(4500.0), "4.500,00");
        assert_eq!(format_brl(1_234_567.5), "1.234.567,50");
        assert_eq!(format_brl(0.0), "0,00");
    }

    #[test]
    fn every_plan_saves_seventeen_percent_yearly() {
        for plan in PLANS {
            assert_eq!(
                yearly_savings_percent(plan.monthly_price, plan.yearly_price),
                17,
                "{}",
                plan.name
            );
        }
    }

    #[test]
    fn savings_edge_cases() {
        assert_eq!(yearly_savings_percent(100.0, 1200.0), 0);
        assert_eq!(yearly_savings_percent(0.0, 0.0), 0);
    }

    #[test]
    fn period_picks_price() {
        let plan = &PLANS[1];
        assert_eq!(BillingPeriod::Monthly.price(plan), 279.99);
        assert_eq!(BillingPeriod::Yearly.price(plan), 2790.90);
    }
}
