//! Built-in chart of accounts for a dairy farm.
//!
//! Every account that moves against cash carries exactly one cash-flow tag, so
//! the sum of the activity buckets reconciles with the change in Kas + Bank.
//! Sale proceeds for equipment and land are investing inflows only. Share
//! issuance ("Pendapatan Saham") is a financing inflow and is reported as
//! revenue in the income statement.

use super::error::CatalogError;
use super::types::{
    AccountCatalog, AccountDefinition, AccountType, CashFlowActivity, IncomeRole,
};

use AccountType::{Asset, Equity, Expense, Liability, Revenue};
use CashFlowActivity::{Financing, Investing, Operating};

/// Account names used by the farm chart.
pub mod names {
    /// Cash on hand.
    pub const KAS: &str = "Kas";
    /// Bank account.
    pub const BANK: &str = "Bank";
    /// Accounts receivable.
    pub const PIUTANG: &str = "Piutang";
    /// Inventory.
    pub const PERSEDIAAN: &str = "Persediaan";
    /// Trade payables.
    pub const HUTANG: &str = "Hutang";
    /// Wages payable.
    pub const HUTANG_KARYAWAN: &str = "Hutang Karyawan";
    /// Taxes payable.
    pub const HUTANG_PAJAK: &str = "Hutang Pajak";
    /// Milk sales.
    pub const PENJUALAN_SUSU: &str = "Penjualan Susu";
    /// Proceeds from selling equipment.
    pub const PENJUALAN_PERLENGKAPAN: &str = "Pendapatan dari Penjualan Perlengkapan";
    /// Proceeds from selling land.
    pub const PENJUALAN_TANAH: &str = "Pendapatan dari Penjualan Tanah";
    /// Share issuance.
    pub const PENDAPATAN_SAHAM: &str = "Pendapatan Saham";
    /// Feed expense.
    pub const BIAYA_PAKAN: &str = "Biaya Pakan";
    /// Veterinary medicine expense.
    pub const BIAYA_OBAT: &str = "Biaya Obat";
    /// Electricity expense.
    pub const BIAYA_LISTRIK: &str = "Biaya Listrik";
    /// Water expense.
    pub const BIAYA_AIR: &str = "Biaya Air";
    /// Cost of revenue purchases.
    pub const BEBAN_POKOK_PENDAPATAN: &str = "Beban Pokok Pendapatan";
    /// General operating expense.
    pub const BIAYA_OPERASIONAL: &str = "Biaya Operasional";
    /// Tax amortisation expense.
    pub const BIAYA_AMORTISASI_PAJAK: &str = "Biaya Amortisasi Pajak";
    /// Vehicle depreciation expense.
    pub const BIAYA_DEPRESIASI_KENDARAAN: &str = "Biaya Depresiasi Kendaraan";
    /// Building depreciation expense.
    pub const BIAYA_DEPRESIASI_BANGUNAN: &str = "Biaya Depresiasi Bangunan";
    /// Equipment purchases.
    pub const PEMBELIAN_PERLENGKAPAN: &str = "Biaya Pembelian Perlengkapan";
    /// Land purchases.
    pub const PEMBELIAN_TANAH: &str = "Biaya Pembelian Tanah";
    /// Vehicle purchases.
    pub const PEMBELIAN_KENDARAAN: &str = "Biaya Pembelian Kendaraan";
    /// Building purchases.
    pub const PEMBELIAN_BANGUNAN: &str = "Biaya Pembelian Bangunan";
    /// Dividends paid.
    pub const BIAYA_DIVIDEN: &str = "Biaya Dividen";
}

use names::*;

fn expense(name: &str, label: &str) -> AccountDefinition {
    AccountDefinition::new(name, Expense)
        .income(IncomeRole::Expense)
        .cash_flow(Operating, label)
}

/// Account definitions of the farm chart, in display order.
#[must_use]
pub fn farm_accounts() -> Vec<AccountDefinition> {
    vec![
        AccountDefinition::new(KAS, Asset).cash(),
        AccountDefinition::new(BANK, Asset).cash(),
        AccountDefinition::new(PIUTANG, Asset).cash_flow(Operating, "Kenaikan Piutang"),
        AccountDefinition::new(HUTANG, Liability).cash_flow(Operating, "Kenaikan Utang Usaha"),
        AccountDefinition::new(HUTANG_KARYAWAN, Liability)
            .cash_flow(Operating, "Kenaikan Utang Karyawan"),
        AccountDefinition::new(HUTANG_PAJAK, Liability).cash_flow(Operating, "Kenaikan Utang Pajak"),
        AccountDefinition::new(PENJUALAN_SUSU, Revenue)
            .income(IncomeRole::Revenue)
            .cash_flow(Operating, "Pendapatan Bersih"),
        AccountDefinition::new(PENJUALAN_PERLENGKAPAN, Revenue)
            .income(IncomeRole::Revenue)
            .cash_flow(Investing, "Penjualan Perlengkapan"),
        AccountDefinition::new(PENJUALAN_TANAH, Revenue)
            .income(IncomeRole::Revenue)
            .cash_flow(Investing, "Penjualan Tanah"),
        AccountDefinition::new(PENDAPATAN_SAHAM, Equity)
            .income(IncomeRole::Revenue)
            .cash_flow(Financing, "Penerbitan Saham Biasa"),
        expense(BIAYA_PAKAN, "Biaya Pakan"),
        expense(BIAYA_OBAT, "Biaya Obat"),
        expense(BIAYA_LISTRIK, "Biaya Listrik"),
        expense(BIAYA_AIR, "Biaya Air"),
        AccountDefinition::new(BEBAN_POKOK_PENDAPATAN, Expense)
            .income(IncomeRole::CostOfGoodsSold)
            .cash_flow(Operating, "Beban Pokok Pendapatan"),
        expense(BIAYA_OPERASIONAL, "Biaya Operasional"),
        expense(BIAYA_AMORTISASI_PAJAK, "Beban Amortisasi Pajak"),
        expense(BIAYA_DEPRESIASI_KENDARAAN, "Beban Depresiasi Kendaraan"),
        expense(BIAYA_DEPRESIASI_BANGUNAN, "Beban Depresiasi Bangunan"),
        AccountDefinition::new(PEMBELIAN_PERLENGKAPAN, Asset)
            .cash_flow(Investing, "Pembelian Perlengkapan"),
        AccountDefinition::new(PEMBELIAN_TANAH, Asset).cash_flow(Investing, "Pembelian Tanah"),
        AccountDefinition::new(PEMBELIAN_KENDARAAN, Asset)
            .cash_flow(Investing, "Pembelian Kendaraan"),
        AccountDefinition::new(PEMBELIAN_BANGUNAN, Asset)
            .cash_flow(Investing, "Pembelian Bangunan"),
        AccountDefinition::new(BIAYA_DIVIDEN, Equity).cash_flow(Financing, "Pembayaran Dividen"),
        AccountDefinition::new(PERSEDIAAN, Asset)
            .income(IncomeRole::Inventory)
            .cash_flow(Operating, "Kenaikan Persediaan"),
    ]
}

impl AccountCatalog {
    /// The built-in farm chart of accounts.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in definitions; the `Result` mirrors `AccountCatalog::new`.
    pub fn farm() -> Result<Self, CatalogError> {
        Self::new(farm_accounts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farm_chart_is_valid() {
        let catalog = AccountCatalog::farm().unwrap();
        assert_eq!(catalog.accounts().len(), 25);
        assert_eq!(catalog.inventory_account(), PERSEDIAAN);
        assert_eq!(catalog.cash_accounts().collect::<Vec<_>>(), vec![KAS, BANK]);
    }

    #[test]
    fn test_income_roles() {
        let catalog = AccountCatalog::farm().unwrap();
        assert_eq!(
            catalog.accounts_with_role(IncomeRole::Revenue).collect::<Vec<_>>(),
            vec![
                PENJUALAN_SUSU,
                PENJUALAN_PERLENGKAPAN,
                PENJUALAN_TANAH,
                PENDAPATAN_SAHAM
            ]
        );
        assert_eq!(
            catalog
                .accounts_with_role(IncomeRole::CostOfGoodsSold)
                .collect::<Vec<_>>(),
            vec![BEBAN_POKOK_PENDAPATAN]
        );
        assert_eq!(catalog.accounts_with_role(IncomeRole::Expense).count(), 8);
        assert_eq!(catalog.income_role(PENDAPATAN_SAHAM), Some(IncomeRole::Revenue));
        assert_eq!(
            catalog.cash_flow_tag(PENDAPATAN_SAHAM).map(|t| t.activity),
            Some(Financing)
        );
        assert_eq!(catalog.income_role(PEMBELIAN_TANAH), None);
    }

    #[test]
    fn test_every_non_cash_account_feeds_one_bucket() {
        let catalog = AccountCatalog::farm().unwrap();
        for account in catalog.accounts() {
            assert_eq!(
                account.cash_flow.is_some(),
                !account.is_cash_equivalent,
                "{} classification",
                account.name
            );
        }

        let mut seen = std::collections::HashSet::new();
        for activity in CashFlowActivity::ALL {
            for category in catalog.cash_flow_categories(activity) {
                for account in category.accounts {
                    assert!(seen.insert(account), "{account} appears twice");
                }
            }
        }
    }

    #[test]
    fn test_financing_categories() {
        let catalog = AccountCatalog::farm().unwrap();
        let labels: Vec<_> = catalog
            .cash_flow_categories(Financing)
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["Penerbitan Saham Biasa", "Pembayaran Dividen"]);
    }
}
