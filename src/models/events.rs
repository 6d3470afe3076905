use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::container::{Container, SubscribedEvent};

/// A named group of containers deployed together.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub containers: Vec<Container>,
}

struct Delivery {
    component: String,
    container: String,
    event: SubscribedEvent,
}

/// Rebuild every container's `subscribed_events` from the `publish_events`
/// of all containers across `components`.
///
/// A subscription is delivered to each container whose `image_name` matches
/// its `container` inside the component it names. Existing entries are
/// replaced, so linking twice gives the same result as linking once.
pub fn link_subscribed_events(components: &mut [Component]) -> usize {
    let mut deliveries = Vec::new();
    for component in components.iter() {
        for publisher in &component.containers {
            for event in &publisher.publish_events {
                for subscription in &event.subscriptions {
                    let mut entry = SubscribedEvent::new();
                    entry.insert("component".to_string(), Value::from(component.name.clone()));
                    entry.insert("container".to_string(), Value::from(publisher.image_name.clone()));
                    entry.insert("event".to_string(), Value::from(event.name.clone()));
                    entry.insert("trigger".to_string(), Value::from(event.trigger.clone()));
                    entry.insert("action".to_string(), Value::from(subscription.action.clone()));
                    entry.insert("args".to_string(), Value::from(subscription.args.clone()));

                    deliveries.push(Delivery {
                        component: subscription.component.clone(),
                        container: subscription.container.clone(),
                        event: entry,
                    });
                }
            }
        }
    }

    for container in components.iter_mut().flat_map(|c| c.containers.iter_mut()) {
        container.subscribed_events.clear();
    }

    let mut delivered = 0;
    for delivery in deliveries {
        let targets = components
            .iter_mut()
            .filter(|c| c.name == delivery.component)
            .flat_map(|c| c.containers.iter_mut())
            .filter(|c| c.image_name == delivery.container);

        let mut matched = false;
        for target in targets {
            target.subscribed_events.push(delivery.event.clone());
            delivered += 1;
            matched = true;
        }

        if !matched {
            debug!(
                "No container {} in component {} for subscription",
                delivery.container, delivery.component
            );
        }
    }

    delivered
}
