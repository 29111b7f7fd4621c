//! Travel planner tool server.
//!
//! Searches a catalog of destinations and builds day-by-day itineraries,
//! served as tools over a line-delimited JSON-RPC protocol on stdio, with
//! an HTTP bridge for browser clients.

pub mod catalog;
pub mod domain;
pub mod mcp;
pub mod planner;
pub mod tools;
pub mod web;
