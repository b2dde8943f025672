use anyhow::Result;
use tracing::warn;

use crate::cli::args::{Cli, Command, ConsensusCmd, InvokeArgs};
use crate::cli::context::{resolve_key_reader, resolve_lander};
use crate::config::AppConfig;
use crate::consensus::registry;
use crate::consensus::{BuildContext, invoke};
use crate::lander::{Finalized, Finalizer};

pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Command::Consensus(ConsensusCmd::Invoke(args)) => handle_invoke(args, &config).await,
    }
}

async fn handle_invoke(args: InvokeArgs, config: &AppConfig) -> Result<()> {
    let request = args.into_request();
    let keys = resolve_key_reader(config);
    let ctx = BuildContext::new(&config.global.chain_name, &keys);
    let finalizer = Finalizer::new(resolve_lander(config)?);

    match invoke(&request, &ctx, &finalizer).await {
        Ok(Finalized::Submitted(receipt)) => {
            println!("Tx id: {}", receipt.txid);
            Ok(())
        }
        Ok(Finalized::Drafted(artifact)) => {
            println!(
                "Tx draft written to {} (digest {}), collect {} signature(s) before sending",
                artifact.path.display(),
                artifact.digest,
                artifact.auth_require.len()
            );
            Ok(())
        }
        // 未注册的共识类型只提示，不视为失败
        Err(err) if err.is_not_registered() => {
            warn!(
                target: "consensus",
                protocol = %request.protocol,
                supported = ?registry::registered().collect::<Vec<_>>(),
                "no transaction attempted"
            );
            println!("consensus type error.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
