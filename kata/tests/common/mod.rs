// disable dead code warning for this module as not every test file uses
// every helper
#![allow(dead_code)]

use kata::{Array, Map, Value};

pub(crate) fn array(members: Vec<Value>) -> Array {
    Array::new(members)
}

pub(crate) fn nested(members: Vec<Value>) -> Value {
    array(members).into()
}

pub(crate) fn map(entries: Vec<(&str, Value)>) -> Map {
    Map::new(entries).unwrap()
}

pub(crate) fn submap(entries: Vec<(&str, Value)>) -> Value {
    map(entries).into()
}
