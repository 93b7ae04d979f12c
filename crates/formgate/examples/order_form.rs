// Example: Order form validation wired end to end
// The order form from a small shop page: name, email, phone, and quantity,
// validated on submit, with errors rendered back through the document
// capability and the valid submission handed to an in-memory sink.

use std::sync::Arc;

use formgate::{
    FormEvent, FormSchema, MemoryDocument, MemorySink, SubmissionController, Validator,
};

const ORDER_FORM_SCHEMA: &str = r#"{
    "fields": [
        {
            "id": "customer-name",
            "rules": [
                { "rule": "required", "message": "Name is required" },
                { "rule": "min_length", "min": 3 }
            ]
        },
        {
            "id": "email",
            "rules": [
                { "rule": "required", "message": "Email is required" },
                { "rule": "email" }
            ]
        },
        {
            "id": "phone",
            "rules": [
                { "rule": "pattern", "pattern": "^\\+?[0-9 -]{7,15}$", "message": "Invalid phone number" }
            ]
        },
        {
            "id": "quantity",
            "rules": [ { "rule": "range", "min": 1, "max": 100 } ]
        }
    ]
}"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let schema = FormSchema::from_json(ORDER_FORM_SCHEMA)?;
    let validator = Validator::new(schema.build_registry()?);

    let dom = MemoryDocument::new();
    let sink = MemorySink::new();
    let controller = Arc::new(SubmissionController::new(validator, dom.clone(), sink.clone()));

    let page = tokio::spawn(Arc::clone(&controller).run());

    // ===== First attempt: several fields invalid =====

    dom.fire(FormEvent::Input {
        field: "customer-name".into(),
        value: "Jo".into(),
    });
    dom.fire(FormEvent::Input {
        field: "email".into(),
        value: "jo@nowhere".into(),
    });
    dom.fire(FormEvent::Input {
        field: "quantity".into(),
        value: "250".into(),
    });
    dom.fire(FormEvent::Submit);

    wait_for_idle(&controller).await;

    println!("-- first attempt --");
    for field in ["customer-name", "email", "phone", "quantity"] {
        for message in dom.rendered_errors(field) {
            println!("{:14} {}", field, message);
        }
    }

    // ===== Second attempt: fixed values =====

    dom.fire(FormEvent::Input {
        field: "customer-name".into(),
        value: "Joanna Kowalska".into(),
    });
    dom.fire(FormEvent::Input {
        field: "email".into(),
        value: "joanna@example.com".into(),
    });
    dom.fire(FormEvent::Input {
        field: "phone".into(),
        value: "+48 600-700-800".into(),
    });
    dom.fire(FormEvent::Input {
        field: "quantity".into(),
        value: "3".into(),
    });
    dom.fire(FormEvent::Submit);

    wait_for_idle(&controller).await;

    println!("-- second attempt --");
    for submission in sink.submissions().await {
        println!("order submitted: {:?}", submission);
    }

    dom.close();
    page.await?;
    Ok(())
}

async fn wait_for_idle<D, S>(controller: &Arc<SubmissionController<D, S>>)
where
    D: formgate::Document + 'static,
    S: formgate::SubmissionSink + 'static,
{
    // Let the event loop drain and the spawned submission settle.
    for _ in 0..100 {
        tokio::task::yield_now().await;
    }
    assert_eq!(controller.phase(), formgate::SubmitPhase::Idle);
}
