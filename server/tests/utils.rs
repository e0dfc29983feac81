use news_server::id::IdStrategy;
use news_server::server::{ServerConfig, ServerNode};
use rocket::local::blocking::Client;

pub fn get_server_config_sequential() -> ServerConfig {
    ServerConfig {
        id_strategy: IdStrategy::Sequential,
        ..ServerConfig::default()
    }
}

pub fn launch_server_node() -> (ServerNode, Client) {
    let node = ServerNode::new(get_server_config_sequential());
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}

pub const SAMPLE_SUBMISSION: &str = r#"{
    "title": "Local team wins",
    "context": "It was a close game.",
    "reporter": "Grace Hopper",
    "country": "Brazil",
    "time": "2023-07-14T18:30:00Z"
}"#;
