//! Shared test fixtures: in-memory collaborator mocks and a prebuilt
//! single-asset engine harness. The mocks are deliberately thin; each
//! one can be told to refuse its next external call so rollback paths
//! are testable.

use core::cell::{Cell, RefCell};

use crate::constants::precision::VALUE_PRECISION;
use crate::engine::Engine;
use crate::external::{AssetLedger, DebtTokenLedger, FeedFailure, PriceSource};
use crate::types::{Address, AssetId, EngineParams, PriceSample};
use crate::{Box, Rc, Vec};

pub const ONE_UNIT: u128 = VALUE_PRECISION;
pub const WETH: AssetId = [0x11; 32];
pub const WBTC: AssetId = [0x22; 32];

pub fn alice() -> Address {
    [0xA1; 32]
}

pub fn bob() -> Address {
    [0xB0; 32]
}

pub fn engine_address() -> Address {
    [0xEE; 32]
}

/// Whole-dollar quote in 8-decimal feed units.
pub fn price(usd: i128) -> i128 {
    usd * 100_000_000
}

// ============ Price feed mock ============

pub struct MockPriceFeed {
    sample: Cell<Result<PriceSample, FeedFailure>>,
}

impl MockPriceFeed {
    pub fn new(price: i128) -> Rc<Self> {
        Rc::new(Self {
            sample: Cell::new(Ok(PriceSample::new(price, 1_700_000_000))),
        })
    }

    pub fn set_price(&self, price: i128) {
        self.sample.set(Ok(PriceSample::new(price, 1_700_000_000)));
    }

    pub fn set_failure(&self, failure: FeedFailure) {
        self.sample.set(Err(failure));
    }
}

impl PriceSource for Rc<MockPriceFeed> {
    fn latest_price(&self) -> Result<PriceSample, FeedFailure> {
        self.sample.get()
    }
}

// ============ Asset custody mock ============

pub struct MockAssetLedger {
    engine: Address,
    balances: RefCell<Vec<(Address, u128)>>,
    fail_next: Cell<bool>,
}

impl MockAssetLedger {
    pub fn new(engine: Address) -> Rc<Self> {
        Rc::new(Self {
            engine,
            balances: RefCell::new(Vec::new()),
            fail_next: Cell::new(false),
        })
    }

    pub fn balance_of(&self, account: Address) -> u128 {
        self.balances
            .borrow()
            .iter()
            .find(|(a, _)| *a == account)
            .map(|(_, b)| *b)
            .unwrap_or(0)
    }

    pub fn set_balance(&self, account: Address, quantity: u128) {
        let mut balances = self.balances.borrow_mut();
        match balances.iter_mut().find(|(a, _)| *a == account) {
            Some(entry) => entry.1 = quantity,
            None => balances.push((account, quantity)),
        }
    }

    /// Refuse the next transfer (either direction), then behave again.
    pub fn fail_next_transfers(&self, fail: bool) {
        self.fail_next.set(fail);
    }

    fn do_move(&self, from: Address, to: Address, quantity: u128) -> bool {
        if self.fail_next.take() {
            return false;
        }
        if self.balance_of(from) < quantity {
            return false;
        }
        self.set_balance(from, self.balance_of(from) - quantity);
        self.set_balance(to, self.balance_of(to) + quantity);
        true
    }
}

impl AssetLedger for Rc<MockAssetLedger> {
    fn transfer_from(&self, from: Address, to: Address, quantity: u128) -> bool {
        self.do_move(from, to, quantity)
    }

    fn transfer(&self, to: Address, quantity: u128) -> bool {
        self.do_move(self.engine, to, quantity)
    }
}

// ============ Debt token mock ============

pub struct MockDebtLedger {
    balances: RefCell<Vec<(Address, u128)>>,
    supply: Cell<u128>,
    fail_next_mint: Cell<bool>,
    fail_next_transfer: Cell<bool>,
    transfer_fail_countdown: Cell<Option<u32>>,
}

impl MockDebtLedger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            balances: RefCell::new(Vec::new()),
            supply: Cell::new(0),
            fail_next_mint: Cell::new(false),
            fail_next_transfer: Cell::new(false),
            transfer_fail_countdown: Cell::new(None),
        })
    }

    pub fn total_supply(&self) -> u128 {
        self.supply.get()
    }

    /// Force an account's balance, adjusting supply by the delta.
    pub fn set_balance(&self, account: Address, amount: u128) {
        let current = self.balance_of(account);
        let supply = self.supply.get() + amount - current;
        self.supply.set(supply);
        self.write_balance(account, amount);
    }

    pub fn fail_next_mints(&self, fail: bool) {
        self.fail_next_mint.set(fail);
    }

    pub fn fail_next_transfers(&self, fail: bool) {
        self.fail_next_transfer.set(fail);
    }

    /// Let `skip` more transfers succeed, then refuse the next one.
    pub fn fail_transfer_after(&self, skip: u32) {
        self.transfer_fail_countdown.set(Some(skip));
    }

    pub fn balance_of(&self, account: Address) -> u128 {
        self.balances
            .borrow()
            .iter()
            .find(|(a, _)| *a == account)
            .map(|(_, b)| *b)
            .unwrap_or(0)
    }

    fn write_balance(&self, account: Address, amount: u128) {
        let mut balances = self.balances.borrow_mut();
        match balances.iter_mut().find(|(a, _)| *a == account) {
            Some(entry) => entry.1 = amount,
            None => balances.push((account, amount)),
        }
    }
}

impl DebtTokenLedger for Rc<MockDebtLedger> {
    fn mint(&self, account: Address, amount: u128) -> bool {
        if self.fail_next_mint.take() {
            return false;
        }
        self.write_balance(account, self.balance_of(account) + amount);
        self.supply.set(self.supply.get() + amount);
        true
    }

    fn burn(&self, amount: u128) {
        // Only the engine's own holdings are ever burned
        let held = MockDebtLedger::balance_of(self, engine_address());
        self.write_balance(engine_address(), held - amount);
        self.supply.set(self.supply.get() - amount);
    }

    fn transfer_from(&self, from: Address, to: Address, amount: u128) -> bool {
        if self.fail_next_transfer.take() {
            return false;
        }
        if let Some(remaining) = self.transfer_fail_countdown.get() {
            if remaining == 0 {
                self.transfer_fail_countdown.set(None);
                return false;
            }
            self.transfer_fail_countdown.set(Some(remaining - 1));
        }
        if MockDebtLedger::balance_of(self, from) < amount {
            return false;
        }
        self.write_balance(from, MockDebtLedger::balance_of(self, from) - amount);
        self.write_balance(to, MockDebtLedger::balance_of(self, to) + amount);
        true
    }

    fn balance_of(&self, account: Address) -> u128 {
        MockDebtLedger::balance_of(self, account)
    }
}

// ============ Harness ============

pub struct Harness {
    pub engine: Engine,
    pub weth: Rc<MockAssetLedger>,
    pub weth_feed: Rc<MockPriceFeed>,
    pub debt: Rc<MockDebtLedger>,
}

/// Single-asset engine: WETH at $2,000, alice and bob each holding
/// 100 units of custody balance.
pub fn harness() -> Harness {
    let weth_feed = MockPriceFeed::new(price(2_000));
    let weth = MockAssetLedger::new(engine_address());
    weth.set_balance(alice(), 100 * ONE_UNIT);
    weth.set_balance(bob(), 100 * ONE_UNIT);
    let debt = MockDebtLedger::new();

    let engine = Engine::new(
        engine_address(),
        vec![WETH],
        vec![Box::new(weth_feed.clone()) as Box<dyn PriceSource>],
        vec![Box::new(weth.clone()) as Box<dyn AssetLedger>],
        Box::new(debt.clone()),
        EngineParams::default(),
    )
    .unwrap();

    Harness {
        engine,
        weth,
        weth_feed,
        debt,
    }
}

pub struct TwoAssetHarness {
    pub engine: Engine,
    pub weth: Rc<MockAssetLedger>,
    pub wbtc: Rc<MockAssetLedger>,
    pub weth_feed: Rc<MockPriceFeed>,
    pub wbtc_feed: Rc<MockPriceFeed>,
    pub debt: Rc<MockDebtLedger>,
}

/// Two-asset engine: WETH at $2,000 and WBTC at $40,000.
pub fn two_asset_harness() -> TwoAssetHarness {
    let weth_feed = MockPriceFeed::new(price(2_000));
    let wbtc_feed = MockPriceFeed::new(price(40_000));
    let weth = MockAssetLedger::new(engine_address());
    let wbtc = MockAssetLedger::new(engine_address());
    weth.set_balance(alice(), 100 * ONE_UNIT);
    weth.set_balance(bob(), 100 * ONE_UNIT);
    wbtc.set_balance(alice(), 10 * ONE_UNIT);
    wbtc.set_balance(bob(), 10 * ONE_UNIT);
    let debt = MockDebtLedger::new();

    let engine = Engine::new(
        engine_address(),
        vec![WETH, WBTC],
        vec![
            Box::new(weth_feed.clone()) as Box<dyn PriceSource>,
            Box::new(wbtc_feed.clone()) as Box<dyn PriceSource>,
        ],
        vec![
            Box::new(weth.clone()) as Box<dyn AssetLedger>,
            Box::new(wbtc.clone()) as Box<dyn AssetLedger>,
        ],
        Box::new(debt.clone()),
        EngineParams::default(),
    )
    .unwrap();

    TwoAssetHarness {
        engine,
        weth,
        wbtc,
        weth_feed,
        wbtc_feed,
        debt,
    }
}
