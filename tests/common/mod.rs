// common/mod.rs - Shared test doubles for the flow tests
//
// This module provides in-memory collaborators so the login, register and
// marketplace flows can run without a browser:
// 1. FakeApi: scripted backend responses plus a log of every call
// 2. RecordingStatus: the form status as a flat log of writes
// 3. MemoryCatalog: marketplace state with a count of filter writes
// 4. Product / response builders

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use pentest_lab_web::web_app::api::MarketplaceApi;
use pentest_lab_web::web_app::error::ApiError;
use pentest_lab_web::web_app::flows::{CatalogState, FormStatus};
use pentest_lab_web::web_app::model::{
    CategoryFilter, EntityId, LoginForm, LoginResponse, Product, RegisterRequest,
    RegisterResponse, User,
};
use rust_decimal::Decimal;

/// One write made against a `RecordingStatus`
#[derive(Clone, Debug, PartialEq)]
pub enum StatusEvent {
    Loading(bool),
    Error(Option<String>),
    Success(Option<String>),
}

#[derive(Debug, Default)]
struct StatusState {
    loading: bool,
    error: Option<String>,
    success: Option<String>,
    events: Vec<StatusEvent>,
}

/// FormStatus that keeps the current values and every write, shared between clones
#[derive(Clone, Debug, Default)]
pub struct RecordingStatus {
    state: Rc<RefCell<StatusState>>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn success(&self) -> Option<String> {
        self.state.borrow().success.clone()
    }

    pub fn events(&self) -> Vec<StatusEvent> {
        self.state.borrow().events.clone()
    }

    /// Pre-populates the banners as if a previous submission had left them
    pub fn preset(&self, error: Option<&str>, success: Option<&str>) {
        let mut state = self.state.borrow_mut();
        state.error = error.map(str::to_string);
        state.success = success.map(str::to_string);
    }
}

impl FormStatus for RecordingStatus {
    fn set_loading(&self, loading: bool) {
        let mut state = self.state.borrow_mut();
        state.loading = loading;
        state.events.push(StatusEvent::Loading(loading));
    }

    fn set_error(&self, message: Option<String>) {
        let mut state = self.state.borrow_mut();
        state.error = message.clone();
        state.events.push(StatusEvent::Error(message));
    }

    fn set_success(&self, message: Option<String>) {
        let mut state = self.state.borrow_mut();
        state.success = message.clone();
        state.events.push(StatusEvent::Success(message));
    }
}

#[derive(Debug, Default)]
struct CatalogCells {
    requested: bool,
    fetched: Option<Result<Vec<Product>, ApiError>>,
    filter: CategoryFilter,
    filter_writes: usize,
}

/// CatalogState in plain cells, shared between clones
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    cells: Rc<RefCell<CatalogCells>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.cells.borrow().fetched.is_some()
    }

    pub fn filter_writes(&self) -> usize {
        self.cells.borrow().filter_writes
    }
}

impl CatalogState for MemoryCatalog {
    fn claim_fetch(&self) -> bool {
        let mut cells = self.cells.borrow_mut();
        !std::mem::replace(&mut cells.requested, true)
    }

    fn store(&self, fetched: Result<Vec<Product>, ApiError>) {
        self.cells.borrow_mut().fetched = Some(fetched);
    }

    fn with_fetched<R>(&self, f: impl FnOnce(Option<&Result<Vec<Product>, ApiError>>) -> R) -> R {
        f(self.cells.borrow().fetched.as_ref())
    }

    fn filter(&self) -> CategoryFilter {
        self.cells.borrow().filter.clone()
    }

    fn set_filter(&self, filter: CategoryFilter) {
        let mut cells = self.cells.borrow_mut();
        cells.filter = filter;
        cells.filter_writes += 1;
    }
}

/// A backend call as seen by `FakeApi`, with the form status at that moment
#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    pub kind: CallKind,
    pub loading_at_call: Option<bool>,
    pub error_at_call: Option<Option<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CallKind {
    Login(LoginForm),
    Register(RegisterRequest),
    ListProducts,
}

#[derive(Default)]
struct FakeState {
    login: VecDeque<Result<LoginResponse, ApiError>>,
    register: VecDeque<Result<RegisterResponse, ApiError>>,
    products: VecDeque<Result<Vec<Product>, ApiError>>,
    calls: Vec<ApiCall>,
}

/// Scripted MarketplaceApi; each call pops the next queued response
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<FakeState>>,
    observer: Option<RecordingStatus>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots `status` whenever a call arrives
    pub fn observing(status: &RecordingStatus) -> Self {
        Self {
            state: Rc::default(),
            observer: Some(status.clone()),
        }
    }

    pub fn with_login(self, response: Result<LoginResponse, ApiError>) -> Self {
        self.state.borrow_mut().login.push_back(response);
        self
    }

    pub fn with_register(self, response: Result<RegisterResponse, ApiError>) -> Self {
        self.state.borrow_mut().register.push_back(response);
        self
    }

    pub fn with_products(self, response: Result<Vec<Product>, ApiError>) -> Self {
        self.state.borrow_mut().products.push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    fn record(&self, kind: CallKind) {
        let call = ApiCall {
            kind,
            loading_at_call: self.observer.as_ref().map(RecordingStatus::loading),
            error_at_call: self.observer.as_ref().map(RecordingStatus::error),
        };
        self.state.borrow_mut().calls.push(call);
    }
}

impl MarketplaceApi for FakeApi {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        self.record(CallKind::Login(form.clone()));
        self.state
            .borrow_mut()
            .login
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted login response".to_string())))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.record(CallKind::Register(request.clone()));
        self.state
            .borrow_mut()
            .register
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted register response".to_string())))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record(CallKind::ListProducts);
        self.state
            .borrow_mut()
            .products
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted product response".to_string())))
    }
}

pub fn login_success(token: &str, username: &str) -> LoginResponse {
    LoginResponse {
        success: true,
        token: Some(token.to_string()),
        user: Some(User {
            id: Some(EntityId::Number(1)),
            username: Some(username.to_string()),
            ..User::default()
        }),
        error: None,
    }
}

pub fn http_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Http {
        status,
        message: message.map(str::to_string),
    }
}

pub fn product(id: i64, name: &str, category: &str, cents: i64) -> Product {
    Product {
        id: EntityId::Number(id),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        category: category.to_string(),
        image: None,
        seller: Some("zero_cool".to_string()),
    }
}

/// Two electronics listings, one collectible, one accessory
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "WiFi Pineapple", "Electronics", 11999),
        product(2, "Rubber Ducky", "Electronics", 4999),
        product(3, "DEF CON Badge", "Collectibles", 25000),
        product(4, "Lock Pick Set", "Accessories", 3450),
    ]
}
