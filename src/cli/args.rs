use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::consensus::ConsensusRequest;
use crate::consensus::request::{DEFAULT_MULTI_ADDRS, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "consensus-invoke", version, about = "共识内核方法调用客户端")]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "配置文件路径（默认查找 consensus-invoke.toml 或 conf/consensus-invoke.toml）"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 共识相关命令
    #[command(subcommand)]
    Consensus(ConsensusCmd),
}

#[derive(Subcommand, Debug)]
pub enum ConsensusCmd {
    /// 调用当前共识的 kernel 方法
    Invoke(InvokeArgs),
}

#[derive(Args, Debug)]
pub struct InvokeArgs {
    #[arg(short = 't', long = "type", help = "共识名称，需符合当前共识状态")]
    pub protocol: String,
    #[arg(long, help = "kernel 方法名")]
    pub method: String,
    #[arg(long, default_value = "", help = "账户名")]
    pub account: String,
    #[arg(long = "desc", value_name = "FILE", help = "共识方法参数的 JSON 描述文件")]
    pub desc: Option<PathBuf>,
    #[arg(long, default_value = "", help = "单笔交易手续费")]
    pub fee: String,
    #[arg(long = "isMulti", help = "多签场景")]
    pub is_multi: bool,
    #[arg(
        short = 'A',
        long = "multiAddrs",
        default_value = DEFAULT_MULTI_ADDRS,
        help = "多签场景下的地址列表文件"
    )]
    pub multi_addrs: PathBuf,
    #[arg(short, long, default_value = DEFAULT_OUTPUT, help = "原始交易输出路径")]
    pub output: PathBuf,
}

impl InvokeArgs {
    pub fn into_request(self) -> ConsensusRequest {
        let mut request = ConsensusRequest::new(self.protocol, self.method)
            .with_account(self.account)
            .with_fee(self.fee)
            .with_multisig(self.is_multi)
            .with_multi_addrs(self.multi_addrs)
            .with_output(self.output);
        if let Some(desc) = self.desc {
            request = request.with_desc_file(desc);
        }
        request
    }
}
