pub mod commander;
pub mod dispatcher;
pub mod messager;
