use super::error::ConsensusError;
use super::protocol::{ProtocolHandler, TdposHandler, XpoaHandler};

static TDPOS: TdposHandler = TdposHandler;
static XPOA: XpoaHandler = XpoaHandler;

/// 进程内固定的协议表，初始化后不再变化。
static REGISTRY: [&(dyn ProtocolHandler); 2] = [&TDPOS, &XPOA];

/// 精确匹配协议标识，不做别名或大小写折叠。
pub fn resolve(protocol: &str) -> Result<&'static dyn ProtocolHandler, ConsensusError> {
    REGISTRY
        .iter()
        .copied()
        .find(|handler| handler.protocol() == protocol)
        .ok_or_else(|| ConsensusError::NotRegistered(protocol.to_string()))
}

pub fn registered() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|handler| handler.protocol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_protocol_resolves_to_itself() {
        for id in registered() {
            let handler = resolve(id).expect("registered protocol");
            assert_eq!(handler.protocol(), id);
        }
        assert_eq!(registered().collect::<Vec<_>>(), vec!["tdpos", "xpoa"]);
    }

    #[test]
    fn lookup_is_exact_match() {
        for id in ["TDPOS", "Xpoa", " tdpos", "pow", ""] {
            let err = resolve(id).err().expect("unregistered protocol");
            assert!(err.is_not_registered());
        }
    }
}
