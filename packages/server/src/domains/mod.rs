// Domain modules
//
// Each domain owns its models, payload contracts and actions. Actions take the
// store as an injected `&dyn BaseFoodStore`; none of them hold state.

pub mod auth;
pub mod donations;
pub mod food_requests;
pub mod foods;
