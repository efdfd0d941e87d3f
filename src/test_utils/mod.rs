//! Shared helpers for handler and view tests.

#![allow(missing_docs)]

mod db;
mod form;
mod response;

pub(crate) use db::get_test_connection;
pub(crate) use form::{
    assert_form_input, assert_form_submit_button, assert_hx_endpoint, must_get_form,
};
pub(crate) use response::{
    assert_content_type, assert_hx_redirect, assert_valid_html, get_header, parse_html_document,
    parse_html_fragment,
};
