#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::exchange::{ExchangeCommand, ExchangeService, ExchangeState};
    use crate::fx::{Currency, CurrencyConverter, RateEntry, RateTable};

    /// Rates chosen so the expected amounts come out to short decimals.
    fn clean_table() -> RateTable {
        RateTable::new(&[
            RateEntry::new(Currency::USD, dec!(1)),
            RateEntry::new(Currency::HKD, dec!(8)),
            RateEntry::new(Currency::AUD, dec!(1.5)),
            RateEntry::new(Currency::MYR, dec!(4)),
            RateEntry::new(Currency::GBP, dec!(0.8)),
            RateEntry::new(Currency::EUR, dec!(2)),
            RateEntry::new(Currency::IDR, dec!(16000)),
            RateEntry::new(Currency::NZD, dec!(1.6)),
            RateEntry::new(Currency::CNY, dec!(7)),
            RateEntry::new(Currency::CZK, dec!(22)),
            RateEntry::new(Currency::AED, dec!(3.5)),
        ])
        .unwrap()
    }

    fn service_over(table: RateTable) -> ExchangeService {
        let converter = CurrencyConverter::new(table, dec!(0.01)).unwrap();
        ExchangeService::new(Arc::new(converter), Currency::USD, Currency::MYR).unwrap()
    }

    fn clean_service() -> ExchangeService {
        service_over(clean_table())
    }

    fn populated(service: &ExchangeService) -> ExchangeState {
        service.transition(
            &service.initial_state(),
            ExchangeCommand::SetSellAmount("100".to_string()),
        )
    }

    #[test]
    fn test_initial_currencies_must_differ() {
        let converter = CurrencyConverter::new(clean_table(), dec!(0.01)).unwrap();
        let result = ExchangeService::new(Arc::new(converter), Currency::EUR, Currency::EUR);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_sell_amount_derives_buy_forward() {
        // Shipped rate table: 100 * 0.99 * 4.375 = 433.125
        let service = service_over(RateTable::default_table());
        let state = populated(&service);

        assert_eq!(state.sell_amount, "100");
        assert_eq!(state.buy_amount, "433.125");
        assert_eq!(state.sell_currency, Currency::USD);
        assert_eq!(state.buy_currency, Currency::MYR);
    }

    #[test]
    fn test_set_buy_amount_derives_sell_reverse() {
        let service = clean_service();
        let state = service.transition(
            &service.initial_state(),
            ExchangeCommand::SetBuyAmount("396".to_string()),
        );

        // 396 / 4 / 0.99 = 100
        assert_eq!(state.buy_amount, "396");
        assert_eq!(state.sell_amount, "100");
    }

    #[test]
    fn test_unusable_amount_clears_both_sides() {
        let service = clean_service();
        let state = populated(&service);
        assert!(state.is_submittable());

        for input in ["", "abc", "0", "0.", "-10"] {
            let next = service.transition(
                &state,
                ExchangeCommand::SetSellAmount(input.to_string()),
            );
            assert_eq!(next.sell_amount, "", "input {:?}", input);
            assert_eq!(next.buy_amount, "", "input {:?}", input);

            let next = service.transition(
                &state,
                ExchangeCommand::SetBuyAmount(input.to_string()),
            );
            assert_eq!(next.sell_amount, "", "input {:?}", input);
            assert_eq!(next.buy_amount, "", "input {:?}", input);
        }
    }

    #[test]
    fn test_set_sell_currency_rederives_with_new_pair() {
        let service = clean_service();
        let state = populated(&service);

        let next = service.transition(&state, ExchangeCommand::SetSellCurrency(Currency::EUR));

        // 100 * 0.99 * 4 / 2 = 198, sell amount untouched
        assert_eq!(next.sell_currency, Currency::EUR);
        assert_eq!(next.buy_currency, Currency::MYR);
        assert_eq!(next.sell_amount, "100");
        assert_eq!(next.buy_amount, "198");
    }

    #[test]
    fn test_set_buy_currency_keeps_sell_side_authoritative() {
        let service = clean_service();
        let state = populated(&service);

        let next = service.transition(&state, ExchangeCommand::SetBuyCurrency(Currency::EUR));

        // Buy side is rederived from the sell amount: 100 * 0.99 * 2 = 198
        assert_eq!(next.sell_currency, Currency::USD);
        assert_eq!(next.buy_currency, Currency::EUR);
        assert_eq!(next.sell_amount, "100");
        assert_eq!(next.buy_amount, "198");
    }

    #[test]
    fn test_selecting_counterpart_sell_currency_swaps() {
        let service = clean_service();
        let state = populated(&service);

        let next = service.transition(&state, ExchangeCommand::SetSellCurrency(Currency::MYR));

        // Swap keeps the current sell amount: 100 MYR -> 100 * 0.99 / 4 = 24.75 USD
        assert_eq!(next.sell_currency, Currency::MYR);
        assert_eq!(next.buy_currency, Currency::USD);
        assert_eq!(next.sell_amount, "100");
        assert_eq!(next.buy_amount, "24.75");
    }

    #[test]
    fn test_selecting_counterpart_buy_currency_swaps() {
        let service = clean_service();
        let state = populated(&service);

        let next = service.transition(&state, ExchangeCommand::SetBuyCurrency(Currency::USD));

        assert_eq!(next.sell_currency, Currency::MYR);
        assert_eq!(next.buy_currency, Currency::USD);
        assert_eq!(next.sell_amount, "100");
        assert_eq!(next.buy_amount, "24.75");
    }

    #[test]
    fn test_counterpart_selection_matches_swap_with_current_sell_amount() {
        let service = clean_service();
        let state = populated(&service);

        let via_selection =
            service.transition(&state, ExchangeCommand::SetSellCurrency(state.buy_currency));

        let mut seeded = state.clone();
        seeded.buy_amount = seeded.sell_amount.clone();
        let via_swap = service.transition(&seeded, ExchangeCommand::SwapCurrencies);

        assert_eq!(via_selection, via_swap);
    }

    #[test]
    fn test_swap_promotes_buy_amount_to_sell() {
        let service = clean_service();
        let state = populated(&service);
        assert_eq!(state.buy_amount, "396");

        let next = service.transition(&state, ExchangeCommand::SwapCurrencies);

        // 396 MYR -> 396 * 0.99 / 4 = 98.01 USD, post-swap currencies
        assert_eq!(next.sell_currency, Currency::MYR);
        assert_eq!(next.buy_currency, Currency::USD);
        assert_eq!(next.sell_amount, "396");
        assert_eq!(next.buy_amount, "98.01");
    }

    #[test]
    fn test_swap_with_empty_amounts_only_flips_currencies() {
        let service = clean_service();
        let next = service.transition(&service.initial_state(), ExchangeCommand::SwapCurrencies);

        assert_eq!(next.sell_currency, Currency::MYR);
        assert_eq!(next.buy_currency, Currency::USD);
        assert_eq!(next.sell_amount, "");
        assert_eq!(next.buy_amount, "");
    }

    #[test]
    fn test_currency_change_with_empty_amounts_stays_empty() {
        let service = clean_service();
        let next = service.transition(
            &service.initial_state(),
            ExchangeCommand::SetSellCurrency(Currency::GBP),
        );

        assert_eq!(next.sell_currency, Currency::GBP);
        assert_eq!(next.sell_amount, "");
        assert_eq!(next.buy_amount, "");
    }

    #[test]
    fn test_submit_resets_to_initial_state() {
        let service = clean_service();
        let mut state = populated(&service);
        state = service.transition(&state, ExchangeCommand::SetSellCurrency(Currency::EUR));

        let next = service.transition(&state, ExchangeCommand::SubmitForm);
        assert_eq!(next, service.initial_state());
    }

    #[test]
    fn test_currencies_stay_distinct_across_transitions() {
        let service = clean_service();
        let commands = [
            ExchangeCommand::SetSellAmount("50".to_string()),
            ExchangeCommand::SetSellCurrency(Currency::MYR),
            ExchangeCommand::SetBuyCurrency(Currency::MYR),
            ExchangeCommand::SwapCurrencies,
            ExchangeCommand::SetBuyCurrency(Currency::EUR),
            ExchangeCommand::SetSellCurrency(Currency::EUR),
            ExchangeCommand::SubmitForm,
        ];

        let mut state = service.initial_state();
        for command in commands {
            state = service.transition(&state, command.clone());
            assert_ne!(
                state.sell_currency, state.buy_currency,
                "after {:?}",
                command
            );
        }
    }

    #[test]
    fn test_display_rate_is_fee_free() {
        let service = clean_service();
        let state = populated(&service);
        assert_eq!(service.display_rate(&state), "4");
    }
}
