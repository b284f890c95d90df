pub mod shared {
    pub mod http;
    pub mod infrastructure {
        pub mod contact_repository;
    }
}

pub mod modules {
    pub mod contacts {
        pub mod core {
            pub mod contact;
            pub mod fields;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod import_contacts {
                pub mod command;
                pub mod csv_reader;
                pub mod handler;
                pub mod outcome;
                pub mod pipeline;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_contacts {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_contact {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_contact {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
