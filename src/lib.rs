pub mod shared {
    pub mod infrastructure {
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod material_tracking {
        pub mod core {
            pub mod events;
            pub mod intents;
            pub mod order;
            pub mod selection_key;
            pub mod status;
        }
        pub mod use_cases {
            pub mod transition_material_status {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod apply_batch_status {
                pub mod handler;
                pub mod result;
                pub mod selection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_material_tracking {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod watch_order_materials {
                pub mod feed;
                pub mod handler;
                pub mod subscription;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod export_material_tracking {
                pub mod serializer;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod order_store;
                pub mod order_store_in_memory;
            }
        }
    }
}

pub mod shell;
